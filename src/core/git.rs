//! Version-control primitives consumed by the aggregation engine.
//!
//! [`VcsBackend`] is the seam between the engine and version control: the full
//! newest-first log, the working-tree status, the add-commit lookup and the
//! content-at-commit query. [`GitBackend`] implements it with the `git` binary
//! for history queries and libgit2 for status, each invocation bounded by a
//! timeout so a hung process cannot stall a pass forever.
//!
//! # Public API
//! - [`VcsBackend`]: async trait the engine talks to
//! - [`GitBackend`]: production implementation

use crate::core::{
    error::{LatrError, Result},
    git_status::GitStatus,
    log_parser::{parse_log, LogEntry, LOG_PRETTY_FORMAT},
};
use async_trait::async_trait;
use git2::{Repository, StatusOptions};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

#[async_trait]
pub trait VcsBackend: Send + Sync {
    /// Newest-first `(path, timestamp)` entries for every file touched under `root`.
    /// A path may appear more than once; its first entry is the newest. Paths are
    /// relative to `root`.
    async fn log(&self, root: &Path) -> Result<Vec<LogEntry>>;

    /// Absolute paths under `root` whose working-tree content is not committed yet.
    async fn uncommitted_paths(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Hash of the newest commit that added `relative`, if any.
    async fn added_commit(&self, root: &Path, relative: &str) -> Result<Option<String>>;

    /// Raw content of `relative` as of `commit`.
    async fn show(&self, root: &Path, commit: &str, relative: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct GitBackend {
    timeout: Duration,
}

impl Default for GitBackend {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl GitBackend {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Execute a git command in `root` and return its stdout
    async fn execute_git_command(&self, root: &Path, args: &[&str]) -> Result<Vec<u8>> {
        let command_name = args
            .iter()
            .find(|arg| !arg.starts_with('-') && !arg.contains('='))
            .copied()
            .unwrap_or("git")
            .to_string();

        let mut cmd = Command::new("git");
        cmd.args(args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        log::debug!("Running git {} in {}", args.join(" "), root.display());

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| LatrError::git_timeout(&command_name, self.timeout))??;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            return Err(LatrError::git_command_failed(
                command_name,
                error_msg.trim(),
            ));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl VcsBackend for GitBackend {
    async fn log(&self, root: &Path) -> Result<Vec<LogEntry>> {
        let stdout = self
            .execute_git_command(
                root,
                &[
                    "log",
                    "-z",
                    "--name-only",
                    "--relative",
                    LOG_PRETTY_FORMAT,
                ],
            )
            .await?;

        let entries = parse_log(&String::from_utf8_lossy(&stdout));
        log::debug!("git log yielded {} paths for {}", entries.len(), root.display());
        Ok(entries)
    }

    async fn uncommitted_paths(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || read_uncommitted_paths(&root))
            .await
            .map_err(|e| LatrError::git_command_failed("status", e.to_string()))?
    }

    async fn added_commit(&self, root: &Path, relative: &str) -> Result<Option<String>> {
        let stdout = self
            .execute_git_command(
                root,
                &[
                    "--literal-pathspecs",
                    "log",
                    "-n",
                    "1",
                    "--format=%H",
                    "--diff-filter=A",
                    "--",
                    relative,
                ],
            )
            .await?;

        let hash = String::from_utf8_lossy(&stdout).trim().to_string();
        Ok(Some(hash).filter(|h| !h.is_empty()))
    }

    async fn show(&self, root: &Path, commit: &str, relative: &str) -> Result<Vec<u8>> {
        // `./` makes the path relative to `root` rather than the repository top level
        let object = format!("{commit}:./{relative}");
        self.execute_git_command(root, &["show", &object]).await
    }
}

fn read_uncommitted_paths(root: &Path) -> Result<Vec<PathBuf>> {
    let repo = Repository::discover(root)?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| LatrError::vcs_unavailable(root, "repository has no working directory"))?;
    let workdir = dunce::canonicalize(workdir)?;

    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false);

    let statuses = repo.statuses(Some(&mut opts))?;
    let mut paths = Vec::new();

    for entry in statuses.iter() {
        let Some(path) = entry.path() else {
            log::warn!("Skipping status entry with non UTF-8 path");
            continue;
        };

        if GitStatus::uncommitted_change(entry.status()).is_none() {
            continue;
        }

        let absolute = path.split('/').fold(workdir.clone(), |acc, part| acc.join(part));
        if absolute.starts_with(root) {
            paths.push(absolute);
        }
    }

    Ok(paths)
}
