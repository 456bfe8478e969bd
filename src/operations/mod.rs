//! High-level install orchestration across components
//!
//! Sequences catalog resolution, closure collection and installation for one
//! or more requested names, accumulating totals and the union of external
//! packages. Unknown names are collected rather than failing fast so every
//! resolvable component still installs and reports; the caller surfaces the
//! failure afterwards.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::catalog::{Catalog, INTERNAL_SUFFIX};
use crate::error::Result;
use crate::installer::{self, InstallOptions, InstallReport};
use crate::resolver;

/// Result of installing one component
pub struct ComponentInstall {
    pub name: String,
    pub report: InstallReport,
}

/// Aggregated result across every requested component
#[derive(Default)]
pub struct InstallSummary {
    pub components: Vec<ComponentInstall>,
    pub packages: Vec<String>,
    pub unknown: Vec<String>,
}

impl InstallSummary {
    pub fn copied(&self) -> usize {
        self.components.iter().map(|c| c.report.copied).sum()
    }

    pub fn skipped(&self) -> usize {
        self.components.iter().map(|c| c.report.skipped).sum()
    }
}

/// Whether a requested name may be installed directly. Internal `-core`
/// components only ever enter a closure transitively.
pub fn is_requestable(catalog: &Catalog, name: &str) -> Option<String> {
    if name.ends_with(INTERNAL_SUFFIX) {
        return None;
    }
    catalog.resolve(name).map(String::from)
}

/// Install every requested component into `dest_root`
///
/// Requested names are deduplicated first, so repeating a name has no extra
/// effect.
pub fn install_components(
    catalog: &Catalog,
    requested: &[String],
    dest_root: &Path,
    options: &InstallOptions,
) -> Result<InstallSummary> {
    let mut summary = InstallSummary::default();
    let mut packages: BTreeSet<String> = BTreeSet::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for name in requested {
        if !seen.insert(name.as_str()) {
            continue;
        }

        let Some(folder) = is_requestable(catalog, name) else {
            summary.unknown.push(name.clone());
            continue;
        };

        let closure = resolver::collect(catalog, &folder)?;
        let report = installer::install_files(&closure.files, catalog.root(), dest_root, options)?;

        packages.extend(closure.packages);
        summary.components.push(ComponentInstall {
            name: name.clone(),
            report,
        });
    }

    summary.packages = packages.into_iter().collect();
    Ok(summary)
}
