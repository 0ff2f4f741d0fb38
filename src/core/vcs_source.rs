//! Per-root records from version-control history merged with uncommitted work.

use crate::core::error::{LatrError, Result};
use crate::core::git::VcsBackend;
use crate::core::os_source::stat_files;
use crate::core::ranking::dedup_last_wins;
use crate::core::record::{FileRecord, Origin};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub(crate) fn join_relative(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .fold(root.to_path_buf(), |acc, part| acc.join(part))
}

/// Collect VCS-mode records for one root.
///
/// The log is newest first, so only the first entry per path is kept: committed
/// paths carry the author date of the newest commit touching them.
/// Modified or untracked files are then stamped with their current mtime and
/// replace the committed record for the same path. Any log or status failure
/// fails the whole root with [`LatrError::VcsUnavailable`].
pub async fn collect_vcs_records(backend: &dyn VcsBackend, root: &Path) -> Result<Vec<FileRecord>> {
    let (log, uncommitted) = tokio::try_join!(backend.log(root), backend.uncommitted_paths(root))
        .map_err(|e| LatrError::vcs_unavailable(root, e.to_string()))?;

    let mut seen = HashSet::new();
    let committed = log
        .into_iter()
        .filter(|entry| seen.insert(entry.path.clone()))
        .map(|entry| FileRecord::new(join_relative(root, &entry.path), entry.timestamp, Origin::Vcs));
    let uncommitted = stat_files(uncommitted, Origin::Uncommitted).await;

    let records = dedup_last_wins(committed.chain(uncommitted));
    log::debug!("{} VCS records for {}", records.len(), root.display());
    Ok(records)
}
