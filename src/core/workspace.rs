//! Workspace roots and path-to-root resolution.

use crate::core::error::{LatrError, Result};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    roots: Vec<PathBuf>,
}

/// A file path split into its owning root and `/`-separated relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub root: PathBuf,
    pub absolute: PathBuf,
    pub relative: String,
}

impl Workspace {
    /// Build a workspace from root directories, resolving each to its canonical
    /// absolute form. Roots that cannot be resolved are dropped with a warning;
    /// duplicates keep their first position.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut resolved: Vec<PathBuf> = Vec::new();
        for root in roots {
            let root = root.as_ref();
            match dunce::canonicalize(root) {
                Ok(path) if path.is_dir() => {
                    if !resolved.contains(&path) {
                        resolved.push(path);
                    }
                }
                Ok(path) => log::warn!("Ignoring workspace root {}: not a directory", path.display()),
                Err(e) => log::warn!("Ignoring workspace root {}: {e}", root.display()),
            }
        }

        if resolved.is_empty() {
            log::warn!("No workspace folders are open.");
        }
        Self { roots: resolved }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find the innermost root containing `path` and the path relative to it.
    pub fn resolve(&self, path: &Path) -> Result<ResolvedPath> {
        let absolute = absolute_path(path)?;

        let root = self
            .roots
            .iter()
            .filter(|root| absolute.starts_with(root))
            .max_by_key(|root| root.components().count())
            .ok_or_else(|| LatrError::not_in_workspace(&absolute))?;

        let mut parts = Vec::new();
        for component in absolute
            .strip_prefix(root)
            .map_err(|_| LatrError::not_in_workspace(&absolute))?
            .components()
        {
            if let Component::Normal(part) = component {
                let part = part
                    .to_str()
                    .ok_or_else(|| LatrError::unencodable_path(&absolute))?;
                parts.push(part);
            }
        }
        let relative = parts.join("/");

        if relative.is_empty() {
            return Err(LatrError::not_in_workspace(&absolute));
        }

        Ok(ResolvedPath {
            root: root.clone(),
            absolute,
            relative,
        })
    }
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = dunce::canonicalize(path) {
        return Ok(canonical);
    }
    // Deleted files still resolve through their parent directory
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    match (parent.and_then(|p| dunce::canonicalize(p).ok()), path.file_name()) {
        (Some(parent), Some(name)) => Ok(parent.join(name)),
        _ => Ok(std::env::current_dir()?.join(path)),
    }
}
