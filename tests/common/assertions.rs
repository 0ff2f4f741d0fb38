//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

pub fn git_view_updated() -> impl Predicate<str> {
    predicates::str::contains("Recent files view updated for Git modified files!")
}

pub fn os_view_updated() -> impl Predicate<str> {
    predicates::str::contains("Recent files view updated for OS modified files!")
}

pub fn history_not_found() -> impl Predicate<str> {
    predicates::str::contains("No Git history found for this file.")
}

pub fn not_in_workspace() -> impl Predicate<str> {
    predicates::str::contains("File is not part of the current workspace.")
}

pub fn has_file_count(files: usize, dirs: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("{files} files in {dirs} directories"))
}
