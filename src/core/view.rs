//! Directory grouping of a ranked set.
//!
//! A pure projection: groups appear in the order their first member appears in
//! the ranked set, members keep the set's order, and the freshness marker always
//! goes to the latest timestamp in the group whatever the global direction.

use crate::core::ranking::RankedSet;
use crate::core::record::FileRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Freshness {
    MostRecent,
    Older,
}

impl Freshness {
    pub fn label(&self) -> &'static str {
        match self {
            Freshness::MostRecent => "Most Recent",
            Freshness::Older => "Older",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedFile {
    #[serde(flatten)]
    pub record: FileRecord,
    pub freshness: Freshness,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryGroup {
    pub directory: PathBuf,
    pub files: Vec<GroupedFile>,
    pub most_recent: DateTime<Utc>,
}

impl DirectoryGroup {
    /// Members carrying the most-recent marker; more than one on timestamp ties.
    pub fn most_recent_files(&self) -> impl Iterator<Item = &GroupedFile> {
        self.files
            .iter()
            .filter(|file| file.freshness == Freshness::MostRecent)
    }
}

pub fn group_by_directory(set: &RankedSet) -> Vec<DirectoryGroup> {
    let mut order: Vec<&Path> = Vec::new();
    let mut members: HashMap<&Path, Vec<&FileRecord>> = HashMap::new();

    for record in set.iter() {
        let dir = record.directory();
        members
            .entry(dir)
            .or_insert_with(|| {
                order.push(dir);
                Vec::new()
            })
            .push(record);
    }

    order
        .into_iter()
        .filter_map(|dir| {
            let records = members.remove(dir)?;
            let most_recent = records.iter().map(|r| r.timestamp).max()?;
            let files = records
                .into_iter()
                .map(|record| GroupedFile {
                    freshness: if record.timestamp == most_recent {
                        Freshness::MostRecent
                    } else {
                        Freshness::Older
                    },
                    record: record.clone(),
                })
                .collect();

            Some(DirectoryGroup {
                directory: dir.to_path_buf(),
                files,
                most_recent,
            })
        })
        .collect()
}
