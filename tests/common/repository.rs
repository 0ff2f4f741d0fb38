//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories, committing at fixed
//! dates, and pinning file modification times.

#![allow(dead_code)]

use latr::core::error::{LatrError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Test repository setup result. The TempDir must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Creates a temporary directory that is not a git repository
pub fn setup_plain_dir() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(LatrError::Io)?;
    let path = dunce::canonicalize(temp_dir.path())?;
    Ok(TestRepo { temp_dir, path })
}

/// Sets up a fresh git repository with user identity configured
pub fn setup_test_repo() -> Result<TestRepo> {
    let repo = setup_plain_dir()?;

    run_git(&repo.path, &["init", "-q"], None)?;
    run_git(&repo.path, &["config", "user.name", "Test User"], None)?;
    run_git(&repo.path, &["config", "user.email", "test@example.com"], None)?;

    Ok(repo)
}

fn run_git(repo_path: &Path, args: &[&str], date: Option<i64>) -> Result<()> {
    let mut cmd = Command::new("git");
    cmd.args(args).current_dir(repo_path);
    if let Some(secs) = date {
        let date = format!("@{secs} +0000");
        cmd.env("GIT_AUTHOR_DATE", &date)
            .env("GIT_COMMITTER_DATE", &date);
    }

    let output = cmd.output().map_err(LatrError::Io)?;
    if !output.status.success() {
        return Err(LatrError::git_command_failed(
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }
    Ok(())
}

/// Creates a file (and its parent directories) with the given content
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(LatrError::Io)?;
    Ok(())
}

/// Pins a file's modification time to `secs` after the Unix epoch
pub fn set_mtime(repo_path: &Path, filename: &str, secs: u64) -> Result<()> {
    let file = fs::File::options()
        .write(true)
        .open(repo_path.join(filename))?;
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))?;
    Ok(())
}

/// Creates a file and pins its modification time
pub fn create_file_at(repo_path: &Path, filename: &str, content: &str, secs: u64) -> Result<()> {
    create_file(repo_path, filename, content)?;
    set_mtime(repo_path, filename, secs)
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    run_git(repo_path, &["add", "-A", "--", filename], None)
}

/// Commits everything staged with author and committer date `secs`
pub fn git_commit_at(repo_path: &Path, message: &str, secs: i64) -> Result<()> {
    run_git(repo_path, &["commit", "-q", "-m", message], Some(secs))
}

pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename)).map_err(LatrError::Io)?;
    Ok(())
}

/// A `latr` command isolated from the user's config and terminal colors
pub fn latr_cmd(config_dir: &Path) -> anyhow::Result<Command> {
    use assert_cmd::prelude::*;

    let mut cmd = Command::cargo_bin("latr")?;
    cmd.env("LATR_CONFIG_DIR", config_dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    Ok(cmd)
}
