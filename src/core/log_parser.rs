//! Parser for `git log -z --name-only` output.
//!
//! Each commit starts with a header (record-separator byte followed by the strict
//! ISO-8601 author date) ended by a newline, then the paths it changed, each
//! terminated by NUL. With `-z` git prints paths verbatim, so names containing
//! quotes, backslashes or newlines need no unquoting. Commits arrive newest
//! first, so the first time a path shows up carries its last-modification time;
//! later sightings are older and ignored.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Byte that starts every commit header
pub const COMMIT_MARKER: char = '\u{1e}';

/// `--pretty` argument producing headers [`parse_log`] understands
pub const LOG_PRETTY_FORMAT: &str = "--pretty=format:%x1e%aI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Path relative to the directory `git log` ran in, `/`-separated
    pub path: String,
    pub timestamp: DateTime<Utc>,
}

fn parse_date(header: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(header.trim()) {
        Ok(date) => Some(date.with_timezone(&Utc)),
        Err(e) => {
            log::warn!("Ignoring commit with unparseable date '{header}': {e}");
            None
        }
    }
}

/// Reduce raw NUL-separated log output to one entry per path, in first-seen order.
pub fn parse_log(output: &str) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut current: Option<DateTime<Utc>> = None;

    for field in output.split('\0') {
        // A header field also carries the commit's first path after its newline
        let path = match field.trim_start_matches('\n').strip_prefix(COMMIT_MARKER) {
            Some(header) => {
                let (date, first_path) = header.split_once('\n').unwrap_or((header, ""));
                current = parse_date(date);
                first_path
            }
            None => field,
        };

        if path.is_empty() {
            continue;
        }

        let Some(timestamp) = current else {
            continue;
        };

        if seen.insert(path) {
            entries.push(LogEntry {
                path: path.to_string(),
                timestamp,
            });
        }
    }

    entries
}
