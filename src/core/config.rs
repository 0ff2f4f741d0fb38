//! User configuration for the aggregation engine.
//!
//! Stored as pretty-printed JSON at `<config dir>/latr/config.json`. Every key is
//! optional; missing keys fall back to the defaults below.

use crate::core::dirs::get_config_file;
use crate::core::error::{LatrError, Result};
use crate::core::record::{Mode, SortDirection};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "venv",
    "__pycache__",
    ".git",
    "target",
    "bin",
    "obj",
    "build",
    "dist",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LatrConfig {
    /// Directory basenames skipped together with their whole subtree
    pub excluded_dirs: BTreeSet<String>,
    pub follow_symlinks: bool,
    pub default_mode: Mode,
    pub descending: bool,
    /// Upper bound for every `git` process invocation
    pub git_timeout_secs: u64,
    /// `*.ext` -> language id, consulted before the built-in table
    pub associations: BTreeMap<String, String>,
}

impl Default for LatrConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            follow_symlinks: true,
            default_mode: Mode::Git,
            descending: true,
            git_timeout_secs: 30,
            associations: BTreeMap::new(),
        }
    }
}

impl LatrConfig {
    /// Load the user config file, or defaults when it does not exist
    pub fn load() -> Result<Self> {
        let config_file = get_config_file()?;
        Self::load_from(&config_file)
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            log::debug!(
                "No config file at {}, using defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(config_file).map_err(|source| LatrError::ConfigRead {
                path: config_file.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| LatrError::ConfigParse {
            path: config_file.to_path_buf(),
            source,
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_file = get_config_file()?;
        self.save_to(&config_file)
    }

    pub fn save_to(&self, config_file: &Path) -> Result<()> {
        if let Some(dir) = config_file.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_file, content)?;
        Ok(())
    }

    pub fn with_extra_excludes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn sort_direction(&self) -> SortDirection {
        SortDirection::from_descending(self.descending)
    }

    pub fn git_timeout(&self) -> Duration {
        Duration::from_secs(self.git_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LatrConfig::default();
        assert!(config.excluded_dirs.contains("node_modules"));
        assert!(config.excluded_dirs.contains(".git"));
        assert_eq!(config.default_mode, Mode::Git);
        assert_eq!(config.sort_direction(), SortDirection::Descending);
    }

    #[test]
    fn test_missing_file_yields_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let config = LatrConfig::load_from(&dir.path().join("config.json"))?;
        assert_eq!(config, LatrConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.path().join("config.json");
        std::fs::write(&file, r#"{ "default_mode": "os", "git_timeout_secs": 5 }"#)?;

        let config = LatrConfig::load_from(&file)?;
        assert_eq!(config.default_mode, Mode::Os);
        assert_eq!(config.git_timeout(), Duration::from_secs(5));
        assert!(config.descending);
        assert!(config.excluded_dirs.contains("dist"));
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_parse_error() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.path().join("config.json");
        std::fs::write(&file, "{ nope")?;

        let err = LatrConfig::load_from(&file).unwrap_err();
        assert!(matches!(err, LatrError::ConfigParse { .. }));
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.path().join("nested").join("config.json");
        let config = LatrConfig::default().with_extra_excludes(["vendor"]);
        config.save_to(&file)?;

        assert_eq!(LatrConfig::load_from(&file)?, config);
        Ok(())
    }
}
