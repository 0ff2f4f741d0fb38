//! Filesystem modification times for walked files.

use crate::core::error::{LatrError, Result};
use crate::core::record::{FileRecord, Origin};
use crate::core::walker::{walk_files, WalkOptions};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::path::{Path, PathBuf};

/// Last-modified instant of a single path.
pub async fn modified_time(path: &Path) -> Result<DateTime<Utc>> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| LatrError::stat(path, e))?;
    let modified = metadata.modified().map_err(|e| LatrError::stat(path, e))?;
    Ok(DateTime::<Utc>::from(modified))
}

/// Stat every path concurrently. Failures are logged and the file is dropped;
/// the returned records keep the input order.
pub async fn stat_files(paths: Vec<PathBuf>, origin: Origin) -> Vec<FileRecord> {
    let stats = join_all(paths.into_iter().map(|path| async move {
        match modified_time(&path).await {
            Ok(timestamp) => Some(FileRecord::new(path, timestamp, origin)),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }))
    .await;

    stats.into_iter().flatten().collect()
}

/// OS-mode records for one workspace root.
pub async fn collect_os_records(root: &Path, options: &WalkOptions) -> Result<Vec<FileRecord>> {
    let files = walk_files(root, options).await?;
    Ok(stat_files(files, Origin::Os).await)
}
