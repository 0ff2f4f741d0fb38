//! Core data structures shared by every stage of the aggregation pipeline.
//!
//! # Public API
//! - [`FileRecord`]: One file with its timestamp and provenance
//! - [`Origin`]: Where a record's timestamp came from
//! - [`Mode`]: Which source drives the ranked view
//! - [`SortDirection`]: Global ordering of the ranked view
//!
//! Records are produced fresh on every aggregation pass and never mutated after
//! creation; later stages build new collections instead of patching old ones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Provenance of a record's timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Filesystem modification time
    Os,
    /// Author date of the newest commit touching the path
    Vcs,
    /// Filesystem modification time of a modified or untracked working-tree file
    Uncommitted,
}

impl Origin {
    /// Label shown next to a file in the grouped view
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Os => "OS",
            Origin::Vcs => "Git",
            Origin::Uncommitted => "Uncommitted Changes",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub origin: Origin,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, timestamp: DateTime<Utc>, origin: Origin) -> Self {
        Self {
            path: path.into(),
            timestamp,
            origin,
        }
    }

    /// Directory the record is grouped under
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// Data source currently driving the ranked view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Os,
    #[default]
    Git,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Os => "os",
            Mode::Git => "git",
        }
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            Mode::Os => 0,
            Mode::Git => 1,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "os" => Ok(Mode::Os),
            "git" | "vcs" => Ok(Mode::Git),
            other => Err(format!("unknown mode '{other}', expected 'os' or 'git'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Descending,
    Ascending,
}

impl SortDirection {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Descending => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
        }
    }

    /// Capitalized name used in notifications
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Descending => "Descending",
            SortDirection::Ascending => "Ascending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_directory_and_file_name() {
        let record = FileRecord::new(
            "/ws/sub/b.txt",
            Utc.timestamp_opt(20, 0).unwrap(),
            Origin::Os,
        );
        assert_eq!(record.directory(), Path::new("/ws/sub"));
        assert_eq!(record.file_name(), "b.txt");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("os".parse::<Mode>(), Ok(Mode::Os));
        assert_eq!("GIT".parse::<Mode>(), Ok(Mode::Git));
        assert!("svn".parse::<Mode>().is_err());
    }

    #[test]
    fn test_direction_flip_is_involution() {
        let dir = SortDirection::Descending;
        assert_eq!(dir.flipped(), SortDirection::Ascending);
        assert_eq!(dir.flipped().flipped(), dir);
    }

    #[test]
    fn test_origin_labels() {
        assert_eq!(Origin::Os.label(), "OS");
        assert_eq!(Origin::Vcs.label(), "Git");
        assert_eq!(Origin::Uncommitted.to_string(), "Uncommitted Changes");
    }

    #[test]
    fn test_record_serialization() -> anyhow::Result<()> {
        let record = FileRecord::new(
            "/ws/a.txt",
            Utc.timestamp_opt(10, 0).unwrap(),
            Origin::Uncommitted,
        );
        let json = serde_json::to_string(&record)?;
        let back: FileRecord = serde_json::from_str(&json)?;
        assert_eq!(record, back);
        Ok(())
    }
}
