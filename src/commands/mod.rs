pub mod config;
pub mod history;
pub mod recent;
pub mod watch;

pub use config::*;
pub use history::*;
pub use recent::*;
pub use watch::*;

use crate::core::{
    error::Result,
    record::Mode,
    workspace::Workspace,
    LatrConfig,
};
use std::env;
use std::path::PathBuf;

/// Workspace selection and overrides shared by the engine-driving commands
#[derive(Debug, Clone, Default)]
pub struct WorkspaceOptions {
    /// Workspace roots; the current directory when empty
    pub roots: Vec<PathBuf>,
    /// Extra directory names to exclude on top of the configured ones
    pub exclude: Vec<String>,
    pub mode: Option<Mode>,
    pub ascending: bool,
}

impl WorkspaceOptions {
    /// Load the user config and apply command-line overrides on top of it
    pub fn resolve_config(&self) -> Result<LatrConfig> {
        let mut config = LatrConfig::load()?.with_extra_excludes(self.exclude.iter().cloned());
        if let Some(mode) = self.mode {
            config.default_mode = mode;
        }
        if self.ascending {
            config.descending = false;
        }
        Ok(config)
    }

    pub fn workspace(&self) -> Result<Workspace> {
        if self.roots.is_empty() {
            let current_dir = env::current_dir()?;
            return Ok(Workspace::new([current_dir]));
        }
        Ok(Workspace::new(&self.roots))
    }
}

/// Notification shown after a mode's view was rebuilt
pub fn mode_updated_message(mode: Mode) -> &'static str {
    match mode {
        Mode::Os => "Recent files view updated for OS modified files!",
        Mode::Git => "Recent files view updated for Git modified files!",
    }
}
