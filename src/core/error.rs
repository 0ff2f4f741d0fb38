//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`LatrError`] which covers every failure the aggregation
//! engine and its host commands can run into. It uses `thiserror` for ergonomic
//! error definitions and includes constructors for the common failure scenarios.
//!
//! # Public API
//! - [`LatrError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, LatrError>`
//!
//! # Error Categories
//! - **Scanning**: unreadable directories and per-file metadata failures
//! - **Version control**: unavailable repository, failed or hung `git` invocations
//! - **History retrieval**: no add-commit, content fetch failure, path outside workspace
//! - **Configuration**: unreadable or malformed config file

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Domain-specific error types for latr
#[derive(Error, Debug)]
pub enum LatrError {
    // Scanning errors
    #[error("Cannot read directory '{path}': {message}")]
    Scan { path: PathBuf, message: String },

    #[error("Cannot read metadata for '{path}': {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    // Version control errors
    #[error("Version control unavailable for '{root}': {message}")]
    VcsUnavailable { root: PathBuf, message: String },

    #[error("git {command} failed: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    #[error("git {command} timed out after {}s", timeout.as_secs())]
    GitTimeout { command: String, timeout: Duration },

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    // History retrieval errors
    #[error("No Git history found for this file.")]
    HistoryNotFound { path: PathBuf },

    #[error("Failed to retrieve the file content from Git history.")]
    ContentRetrieval {
        path: PathBuf,
        /// `None` when the path could not be expressed to git at all
        commit: Option<String>,
    },

    #[error("File is not part of the current workspace.")]
    NotInWorkspace { path: PathBuf },

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using LatrError
pub type Result<T> = std::result::Result<T, LatrError>;

impl LatrError {
    /// Create a scan error for an unreadable directory
    pub fn scan(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Scan {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a stat error for a single file
    pub fn stat(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source,
        }
    }

    /// Create a version-control-unavailable error for one workspace root
    pub fn vcs_unavailable(root: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::VcsUnavailable {
            root: root.into(),
            message: message.into(),
        }
    }

    /// Create a git command failed error
    pub fn git_command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a git timeout error
    pub fn git_timeout(command: impl Into<String>, timeout: Duration) -> Self {
        Self::GitTimeout {
            command: command.into(),
            timeout,
        }
    }

    /// Create a history not found error
    pub fn history_not_found(path: impl Into<PathBuf>) -> Self {
        Self::HistoryNotFound { path: path.into() }
    }

    /// Create a content retrieval error
    pub fn content_retrieval(path: impl Into<PathBuf>, commit: impl Into<String>) -> Self {
        Self::ContentRetrieval {
            path: path.into(),
            commit: Some(commit.into()),
        }
    }

    /// Create a content retrieval error for a path git cannot be asked about
    pub fn unencodable_path(path: impl Into<PathBuf>) -> Self {
        Self::ContentRetrieval {
            path: path.into(),
            commit: None,
        }
    }

    /// Create a not-in-workspace error
    pub fn not_in_workspace(path: impl Into<PathBuf>) -> Self {
        Self::NotInWorkspace { path: path.into() }
    }

    /// Whether this failure is meant to be shown to the user as a notification
    /// rather than only logged for diagnostics.
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            Self::HistoryNotFound { .. } | Self::ContentRetrieval { .. } | Self::NotInWorkspace { .. }
        )
    }
}
