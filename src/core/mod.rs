//! Core functionality for the latr tool.
//!
//! This module provides the recent-file aggregation engine: the tree walker and
//! timestamp sources, the merge/dedup/sort engine, the grouping view, history
//! retrieval and the session object that ties them together.

pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
#[cfg(test)]
pub(crate) mod fake_vcs;
pub mod git;
pub mod git_status;
pub mod history;
pub mod language;
pub mod log_parser;
pub mod os_source;
pub mod output;
pub mod ranking;
pub mod record;
pub mod render;
pub mod session;
pub mod vcs_source;
pub mod view;
pub mod walker;
pub mod workspace;

// === Error handling ===
pub use error::{LatrError, Result};

// === Configuration ===
pub use config::LatrConfig;

// === Data model ===
// Records, provenance, modes and ordering shared by every pipeline stage
pub use record::{FileRecord, Mode, Origin, SortDirection};
pub use ranking::RankedSet;
pub use view::{DirectoryGroup, Freshness, GroupedFile};

// === Version control ===
pub use git::{GitBackend, VcsBackend};
pub use git_status::GitStatus;
pub use log_parser::LogEntry;

// === Engine ===
pub use history::HistoricalContent;
pub use session::{Session, ViewChange};
pub use workspace::Workspace;

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success};
pub use render::render_grouped_view;
