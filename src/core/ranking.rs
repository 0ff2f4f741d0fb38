//! Merge, deduplication and ordering of file records.
//!
//! A [`RankedSet`] is unique by path and ordered by timestamp under one
//! direction. Sorting is stable, so records with equal timestamps keep their
//! discovery order and repeated re-sorts without new data are idempotent.

use crate::core::record::{FileRecord, SortDirection};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Deduplicate by path. The record seen last replaces earlier ones but takes
/// over the slot where the path was first discovered.
pub fn dedup_last_wins(records: impl IntoIterator<Item = FileRecord>) -> Vec<FileRecord> {
    let mut slots: HashMap<PathBuf, usize> = HashMap::new();
    let mut unique: Vec<FileRecord> = Vec::new();

    for record in records {
        match slots.get(&record.path) {
            Some(&slot) => unique[slot] = record,
            None => {
                slots.insert(record.path.clone(), unique.len());
                unique.push(record);
            }
        }
    }

    unique
}

fn sort_records(records: &mut [FileRecord], direction: SortDirection) {
    match direction {
        SortDirection::Descending => records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortDirection::Ascending => records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedSet {
    records: Vec<FileRecord>,
    direction: SortDirection,
}

impl RankedSet {
    pub fn empty(direction: SortDirection) -> Self {
        Self {
            records: Vec::new(),
            direction,
        }
    }

    /// Concatenate per-root record sets in order, deduplicate, then sort.
    pub fn build<I>(per_root: I, direction: SortDirection) -> Self
    where
        I: IntoIterator<Item = Vec<FileRecord>>,
    {
        let mut records = dedup_last_wins(per_root.into_iter().flatten());
        sort_records(&mut records, direction);
        Self { records, direction }
    }

    /// A new set holding the same records re-sorted under `direction`.
    pub fn resorted(&self, direction: SortDirection) -> Self {
        let mut records = self.records.clone();
        sort_records(&mut records, direction);
        Self { records, direction }
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}
