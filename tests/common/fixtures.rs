//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use latr::core::error::Result;

pub const T_OLD: i64 = 1_600_000_000;
pub const T_NEW: i64 = 1_600_000_100;

/// `x.txt` committed at T_OLD and again at T_NEW; `y.txt` only at T_OLD.
pub fn create_two_commit_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "x.txt", "first\n")?;
    create_file(&repo.path, "docs/y.txt", "docs\n")?;
    git_add(&repo.path, ".")?;
    git_commit_at(&repo.path, "Initial commit", T_OLD)?;

    create_file(&repo.path, "x.txt", "second\n")?;
    git_add(&repo.path, "x.txt")?;
    git_commit_at(&repo.path, "Update x", T_NEW)?;

    Ok(repo)
}

/// Plain directory: a.txt (older), sub/b.txt (newer), build/c.txt (excluded)
pub fn create_os_tree() -> Result<TestRepo> {
    let repo = setup_plain_dir()?;

    create_file_at(&repo.path, "a.txt", "a", 1_000)?;
    create_file_at(&repo.path, "sub/b.txt", "b", 2_000)?;
    create_file_at(&repo.path, "build/c.txt", "c", 3_000)?;
    create_file_at(&repo.path, "web/node_modules/pkg/index.js", "x", 4_000)?;

    Ok(repo)
}
