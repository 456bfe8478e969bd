//! Component catalog built from the library source tree
//!
//! The catalog maps requestable names to component folders. Every immediate
//! subdirectory of the source root (except the shared styles folder) is a
//! component folder; folders carrying the `ui-` prefix are additionally
//! reachable through their short alias with the prefix stripped.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InlayError, Result};

/// Prefix carried by every component folder in the library tree
pub const COMPONENT_PREFIX: &str = "ui-";

/// Shared styles folder, never registered as a component
pub const SHARED_STYLES_DIR: &str = "styles";

/// Alias suffix marking internal-only components (pulled in transitively,
/// never installable by name)
pub const INTERNAL_SUFFIX: &str = "-core";

/// Name-to-folder lookup table over the source root
pub struct Catalog {
    root: PathBuf,
    names: HashMap<String, String>,
}

impl Catalog {
    /// Scan the immediate subdirectories of `source_root` and build the
    /// name table. Rebuilt fresh on every invocation; never cached.
    pub fn scan(source_root: &Path) -> Result<Self> {
        let root =
            dunce::canonicalize(source_root).map_err(|_| InlayError::SourceRootNotFound {
                path: source_root.display().to_string(),
            })?;

        let entries = fs::read_dir(&root).map_err(|e| InlayError::CatalogScanFailed {
            path: root.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut names = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| InlayError::CatalogScanFailed {
                path: root.display().to_string(),
                reason: e.to_string(),
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            let Some(folder) = entry.file_name().to_str().map(String::from) else {
                continue;
            };
            if folder == SHARED_STYLES_DIR {
                continue;
            }
            // Directory-listing order, deliberately unsorted: when two folders
            // strip to the same alias the later registration wins.
            names.insert(folder.clone(), folder.clone());
            if let Some(alias) = folder.strip_prefix(COMPONENT_PREFIX) {
                names.insert(alias.to_string(), folder.clone());
            }
        }

        Ok(Self { root, names })
    }

    /// Canonicalized source root the catalog was scanned from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a requested name (canonical or alias) to its folder
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Absolute path of a component folder
    pub fn folder_path(&self, folder: &str) -> PathBuf {
        self.root.join(folder)
    }

    /// Sorted names a consumer may request directly: aliases and unprefixed
    /// folders, minus internal-only `-core` components.
    pub fn installable(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .names
            .keys()
            .filter(|name| !name.starts_with(COMPONENT_PREFIX) && !name.ends_with(INTERNAL_SUFFIX))
            .cloned()
            .collect();
        names.sort();
        names
    }
}
