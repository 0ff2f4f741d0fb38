//! Consolidated test utilities for latr
//!
//! Real git repositories and real files in temporary directories, with commit
//! dates and modification times pinned so rankings are deterministic.

pub mod assertions;
pub mod fixtures;
pub mod repository;
