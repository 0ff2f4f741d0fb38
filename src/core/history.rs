//! Content of a file as of the commit that introduced its current lifetime.

use crate::core::error::{LatrError, Result};
use crate::core::git::VcsBackend;
use crate::core::language::language_for_path;
use crate::core::workspace::Workspace;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalContent {
    pub path: PathBuf,
    pub root: PathBuf,
    pub relative: String,
    pub commit: String,
    #[serde(skip)]
    pub content: Vec<u8>,
    pub language: String,
}

impl HistoricalContent {
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}

/// Look up the add-commit of `path` and fetch its content at that commit.
///
/// A failed or empty add-commit query is [`LatrError::HistoryNotFound`]; a
/// failed or empty content fetch is [`LatrError::ContentRetrieval`].
pub async fn historical_content(
    backend: &dyn VcsBackend,
    workspace: &Workspace,
    path: &Path,
    associations: &BTreeMap<String, String>,
) -> Result<HistoricalContent> {
    let resolved = workspace.resolve(path)?;
    log::debug!(
        "Resolved {} to {} in {}",
        path.display(),
        resolved.relative,
        resolved.root.display()
    );

    let commit = match backend.added_commit(&resolved.root, &resolved.relative).await {
        Ok(Some(commit)) => commit,
        Ok(None) => return Err(LatrError::history_not_found(&resolved.absolute)),
        Err(e) => {
            log::warn!("Error fetching commit for added file: {e}");
            return Err(LatrError::history_not_found(&resolved.absolute));
        }
    };
    log::debug!("Commit where {} was added: {commit}", resolved.relative);

    let content = match backend.show(&resolved.root, &commit, &resolved.relative).await {
        Ok(content) if !content.is_empty() => content,
        Ok(_) => return Err(LatrError::content_retrieval(&resolved.absolute, commit)),
        Err(e) => {
            log::warn!("Error fetching file content from Git history: {e}");
            return Err(LatrError::content_retrieval(&resolved.absolute, commit));
        }
    };

    Ok(HistoricalContent {
        language: language_for_path(&resolved.absolute, associations),
        path: resolved.absolute,
        root: resolved.root,
        relative: resolved.relative,
        commit,
        content,
    })
}
