//! Local import resolution
//!
//! Maps a relative specifier to the concrete file it denotes. Candidates are
//! tried in order and the first existing one wins: the literal joined path,
//! the path with each source extension appended, then the path as a directory
//! holding an index file. A winning candidate that is a test/story file or
//! that escapes the source root resolves to nothing; callers ignore that
//! silently since such imports may legitimately point outside the managed
//! tree.

use std::path::{Path, PathBuf};

use wax::{CandidatePath, Glob, Pattern};

/// Extensions tried when a specifier omits one, in resolution order
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "js"];

/// Test and story files are never closure members
const EXCLUDED_FILES: &str = "*.{test,stories}.{ts,js}";

/// Whether a file is excluded from closures by its name suffix
pub fn is_excluded(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    Glob::new(EXCLUDED_FILES)
        .map(|glob| glob.matched(&CandidatePath::from(name)).is_some())
        .unwrap_or(false)
}

/// Resolve a relative specifier against the file that imports it
pub fn resolve_local(from_file: &Path, specifier: &str, source_root: &Path) -> Option<PathBuf> {
    let base = from_file.parent()?;
    let joined = base.join(specifier);

    let mut candidates = vec![joined.clone()];
    for ext in SOURCE_EXTENSIONS {
        // Appended, not substituted: './badge.styles' must try
        // 'badge.styles.ts', not 'badge.ts'
        candidates.push(PathBuf::from(format!("{}.{}", joined.display(), ext)));
    }
    for ext in SOURCE_EXTENSIONS {
        candidates.push(joined.join(format!("index.{ext}")));
    }

    let hit = candidates.into_iter().find(|candidate| candidate.is_file())?;
    let resolved = dunce::canonicalize(&hit).ok()?;

    if !resolved.starts_with(source_root) {
        return None;
    }
    if is_excluded(&resolved) {
        return None;
    }
    Some(resolved)
}
