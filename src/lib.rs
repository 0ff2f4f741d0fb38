//! Latr - recently touched files across a multi-folder workspace.
//!
//! The library ranks files by filesystem modification time or by version-control
//! history, merges in uncommitted working-tree changes, and projects the ranked
//! set into directory groups with freshness markers. It can also fetch a file's
//! content as of the commit that added it.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - [`Session`]: recompute, toggle sort, switch mode, grouped view, history
//! - [`Workspace`] and [`LatrConfig`]: inputs to a session
//! - [`VcsBackend`]: the version-control seam, implemented by [`GitBackend`]
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    DirectoryGroup,
    FileRecord,
    Freshness,
    GitBackend,
    GroupedFile,
    HistoricalContent,
    LatrConfig,
    LatrError,
    Mode,
    Origin,
    RankedSet,
    Result,
    Session,
    SortDirection,
    VcsBackend,
    ViewChange,
    Workspace,
};
