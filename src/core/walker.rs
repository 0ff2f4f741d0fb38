//! Recursive file enumeration under one workspace root.
//!
//! Excluded directories are matched by exact basename, never by pattern, and are
//! pruned together with their whole subtree. Unreadable entries are logged and
//! skipped so one bad folder never aborts the scan. When symlinks are followed,
//! `walkdir` tracks the ancestor chain and reports loops as errors, which are
//! skipped like any other unreadable entry.

use crate::core::error::{LatrError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub excluded_dirs: BTreeSet<String>,
    pub follow_symlinks: bool,
}

impl WalkOptions {
    pub fn new(excluded_dirs: BTreeSet<String>, follow_symlinks: bool) -> Self {
        Self {
            excluded_dirs,
            follow_symlinks,
        }
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.excluded_dirs.contains(name))
    }
}

/// Collect every regular file reachable from `root`, in walk order.
pub fn walk_files_blocking(root: &Path, options: &WalkOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_symlinks)
        .into_iter()
        .filter_entry(|entry| !options.is_excluded(entry));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                let err = LatrError::scan(path, err.to_string());
                log::warn!("Skipping unreadable entry: {err}");
            }
        }
    }

    log::debug!("Walked {} files under {}", files.len(), root.display());
    files
}

/// Async wrapper that runs the walk on the blocking pool.
pub async fn walk_files(root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    let root_owned = root.to_path_buf();
    let options = options.clone();
    tokio::task::spawn_blocking(move || walk_files_blocking(&root_owned, &options))
        .await
        .map_err(|e| LatrError::scan(root, e.to_string()))
}
