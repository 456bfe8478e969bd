//! File installation into a consumer project
//!
//! Materializes a collected closure under a destination root, mirroring each
//! file's path relative to the library source root. Existing destination
//! files are skipped unless `force` is set, so consumer customizations are
//! never clobbered by default. Under `dry_run` no filesystem mutation of any
//! kind occurs, directory creation included, yet the reported counts match a
//! real run. The batch is not atomic: a copy failure aborts the install and
//! leaves the files copied before it in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InlayError, Result};
use crate::progress::CopyProgress;

/// Conflict and mutation policy for one install
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub force: bool,
    pub dry_run: bool,
}

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Copied,
    SkippedExisting,
}

/// Per-file outcome, kept for verbose reporting
#[derive(Debug, Clone)]
pub struct InstalledFile {
    pub relative: PathBuf,
    pub action: FileAction,
}

/// Aggregated result of one install
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    pub copied: usize,
    pub skipped: usize,
    pub files: Vec<InstalledFile>,
}

/// Install `files` (absolute paths under `source_root`) into `dest_root`
pub fn install_files(
    files: &[PathBuf],
    source_root: &Path,
    dest_root: &Path,
    options: &InstallOptions,
) -> Result<InstallReport> {
    let mut report = InstallReport::default();
    let progress = CopyProgress::new(files.len() as u64, options.dry_run);

    for file in files {
        let relative = file
            .strip_prefix(source_root)
            .map_err(|_| InlayError::IoError {
                message: format!("file '{}' is outside the source root", file.display()),
            })?;
        progress.update(&relative.display().to_string());

        match install_one(file, relative, dest_root, options) {
            Ok(action) => {
                match action {
                    FileAction::Copied => report.copied += 1,
                    FileAction::SkippedExisting => report.skipped += 1,
                }
                report.files.push(InstalledFile {
                    relative: relative.to_path_buf(),
                    action,
                });
            }
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        }
    }

    progress.finish();
    Ok(report)
}

fn install_one(
    file: &Path,
    relative: &Path,
    dest_root: &Path,
    options: &InstallOptions,
) -> Result<FileAction> {
    let target = dest_root.join(relative);

    if target.exists() && !options.force {
        return Ok(FileAction::SkippedExisting);
    }

    if !options.dry_run {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| InlayError::FileWriteFailed {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        fs::copy(file, &target).map_err(|e| InlayError::CopyFailed {
            from: file.display().to_string(),
            to: target.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    Ok(FileAction::Copied)
}
