//! In-memory [`VcsBackend`] for unit tests.

use crate::core::error::{LatrError, Result};
use crate::core::git::VcsBackend;
use crate::core::log_parser::LogEntry;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct FakeBackend {
    logs: Mutex<HashMap<PathBuf, Vec<LogEntry>>>,
    uncommitted: Mutex<HashMap<PathBuf, Vec<PathBuf>>>,
    added: Mutex<HashMap<(PathBuf, String), String>>,
    contents: Mutex<HashMap<(String, String), Vec<u8>>>,
    failing: Mutex<HashSet<PathBuf>>,
    log_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn with_log(self, root: &Path, entries: Vec<LogEntry>) -> Self {
        self.set_log(root, entries);
        self
    }

    pub fn set_log(&self, root: &Path, entries: Vec<LogEntry>) {
        self.logs.lock().insert(root.to_path_buf(), entries);
    }

    pub fn set_uncommitted(&self, root: &Path, paths: Vec<PathBuf>) {
        self.uncommitted.lock().insert(root.to_path_buf(), paths);
    }

    pub fn set_added(&self, root: &Path, relative: &str, commit: &str, content: &[u8]) {
        self.added
            .lock()
            .insert((root.to_path_buf(), relative.to_string()), commit.to_string());
        self.contents
            .lock()
            .insert((commit.to_string(), relative.to_string()), content.to_vec());
    }

    pub fn fail_root(&self, root: &Path) {
        self.failing.lock().insert(root.to_path_buf());
    }

    pub fn log_calls(&self) -> usize {
        self.log_calls.load(Ordering::SeqCst)
    }

    fn check(&self, root: &Path, command: &str) -> Result<()> {
        if self.failing.lock().contains(root) {
            return Err(LatrError::git_command_failed(
                command,
                "fatal: not a git repository",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl VcsBackend for FakeBackend {
    async fn log(&self, root: &Path) -> Result<Vec<LogEntry>> {
        self.log_calls.fetch_add(1, Ordering::SeqCst);
        self.check(root, "log")?;
        Ok(self.logs.lock().get(root).cloned().unwrap_or_default())
    }

    async fn uncommitted_paths(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.check(root, "status")?;
        Ok(self.uncommitted.lock().get(root).cloned().unwrap_or_default())
    }

    async fn added_commit(&self, root: &Path, relative: &str) -> Result<Option<String>> {
        self.check(root, "log")?;
        Ok(self
            .added
            .lock()
            .get(&(root.to_path_buf(), relative.to_string()))
            .cloned())
    }

    async fn show(&self, root: &Path, commit: &str, relative: &str) -> Result<Vec<u8>> {
        self.check(root, "show")?;
        self.contents
            .lock()
            .get(&(commit.to_string(), relative.to_string()))
            .cloned()
            .ok_or_else(|| {
                LatrError::git_command_failed("show", format!("path '{relative}' does not exist"))
            })
    }
}
