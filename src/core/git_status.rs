//! Type-safe git file status enumeration.
//!
//! This module defines [`GitStatus`] and the mapping from libgit2 status flags.
//! The VCS history source only cares about one question: does the working tree
//! hold content for this path that no commit has recorded yet? See
//! [`GitStatus::uncommitted_change`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitStatus {
    /// Modified file (M)
    Modified,
    /// Added/new file in index (A)
    Added,
    /// Deleted file (D)
    Deleted,
    /// Renamed file (R)
    Renamed,
    /// Type changed (T)
    TypeChanged,
    /// Untracked file (??)
    Untracked,
    /// Unmerged/conflicted file (UU)
    Unmerged,
}

impl GitStatus {
    /// Status of the index side of an entry, if it differs from HEAD
    pub fn from_git2_staged(flags: git2::Status) -> Option<GitStatus> {
        if flags.contains(git2::Status::INDEX_NEW) {
            return Some(GitStatus::Added);
        }
        if flags.contains(git2::Status::INDEX_MODIFIED) {
            return Some(GitStatus::Modified);
        }
        if flags.contains(git2::Status::INDEX_DELETED) {
            return Some(GitStatus::Deleted);
        }
        if flags.contains(git2::Status::INDEX_RENAMED) {
            return Some(GitStatus::Renamed);
        }
        if flags.contains(git2::Status::INDEX_TYPECHANGE) {
            return Some(GitStatus::TypeChanged);
        }

        None
    }

    /// Status of the working-tree side of an entry, if it differs from the index
    pub fn from_git2_unstaged(flags: git2::Status) -> Option<GitStatus> {
        if flags.contains(git2::Status::CONFLICTED) {
            return Some(GitStatus::Unmerged);
        }
        if flags.contains(git2::Status::WT_NEW) {
            return Some(GitStatus::Untracked);
        }
        if flags.contains(git2::Status::WT_MODIFIED) {
            return Some(GitStatus::Modified);
        }
        if flags.contains(git2::Status::WT_DELETED) {
            return Some(GitStatus::Deleted);
        }
        if flags.contains(git2::Status::WT_RENAMED) {
            return Some(GitStatus::Renamed);
        }
        if flags.contains(git2::Status::WT_TYPECHANGE) {
            return Some(GitStatus::TypeChanged);
        }

        None
    }

    /// Whether this status means the file's current content is newer than any
    /// commit: modified (staged or not), newly added, or untracked.
    pub fn is_uncommitted_content(&self) -> bool {
        matches!(
            self,
            GitStatus::Modified | GitStatus::Added | GitStatus::Untracked
        )
    }

    /// Classify a status entry as an uncommitted content change.
    ///
    /// The working-tree side wins over the index side, so a file that was staged
    /// and then deleted from disk is not reported.
    pub fn uncommitted_change(flags: git2::Status) -> Option<GitStatus> {
        match Self::from_git2_unstaged(flags) {
            Some(status) => Some(status).filter(GitStatus::is_uncommitted_content),
            None => Self::from_git2_staged(flags).filter(GitStatus::is_uncommitted_content),
        }
    }
}
