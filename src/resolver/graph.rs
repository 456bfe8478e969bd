//! Worklist traversal computing a component's dependency closure
//!
//! The traversal is iterative: a FIFO queue of files plus two visited sets,
//! one for files and one for top-level folders. The first time any file in a
//! sibling folder is reached, the whole folder is enqueued, so referencing a
//! single file of another component pulls that component in completely. A
//! file may be queued from several referrers but is processed at most once,
//! which bounds the traversal and guarantees termination.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::imports::{self, ALWAYS_AVAILABLE, LIBRARY_PACKAGE};
use super::local;
use crate::catalog::Catalog;
use crate::error::{InlayError, Result};

/// The transitive file set and external package set reachable from one
/// component. Both lists are deduplicated and sorted, so repeated collection
/// over an unchanged tree yields identical output.
#[derive(Debug, Clone, Default)]
pub struct Closure {
    pub files: Vec<PathBuf>,
    pub packages: Vec<String>,
}

/// Non-excluded files directly under a component folder
pub fn component_files(folder: &Path) -> Vec<PathBuf> {
    WalkDir::new(folder)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| !local::is_excluded(path))
        .collect()
}

/// Collect the dependency closure of `unit_folder`
pub fn collect(catalog: &Catalog, unit_folder: &str) -> Result<Closure> {
    let root = catalog.root();

    let mut queue: VecDeque<PathBuf> =
        component_files(&catalog.folder_path(unit_folder)).into();
    let mut visited_files: HashSet<PathBuf> = HashSet::new();
    let mut visited_folders: HashSet<String> = HashSet::new();
    visited_folders.insert(unit_folder.to_string());
    let mut packages: BTreeSet<String> = BTreeSet::new();

    while let Some(file) = queue.pop_front() {
        if !visited_files.insert(file.clone()) {
            continue;
        }

        let source = fs::read_to_string(&file).map_err(|e| InlayError::FileReadFailed {
            path: file.display().to_string(),
            reason: e.to_string(),
        })?;

        for specifier in imports::extract_imports(&source) {
            if imports::is_local(&specifier) {
                let Some(target) = local::resolve_local(&file, &specifier, root) else {
                    continue;
                };
                if let Some(folder) = owning_folder(&target, root) {
                    if visited_folders.insert(folder.clone()) {
                        queue.extend(component_files(&root.join(&folder)));
                    }
                }
                queue.push_back(target);
            } else {
                let package = imports::normalize_package(&specifier);
                if ALWAYS_AVAILABLE.contains(&package.as_str()) || package == LIBRARY_PACKAGE {
                    continue;
                }
                packages.insert(package);
            }
        }
    }

    let mut files: Vec<PathBuf> = visited_files.into_iter().collect();
    files.sort();

    Ok(Closure {
        files,
        packages: packages.into_iter().collect(),
    })
}

/// Top-level folder owning a resolved file, or `None` for a file sitting
/// directly under the source root
fn owning_folder(file: &Path, root: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let mut components = relative.components();
    let first = components.next()?;
    components.next()?;
    first.as_os_str().to_str().map(String::from)
}
