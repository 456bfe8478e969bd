//! Import extraction and specifier classification
//!
//! A deliberate regex scan, not a parser: the contract only needs specifier
//! strings out of `import ... from '<spec>'` and bare `import '<spec>'`
//! declarations. Comments are stripped first so commented-out imports never
//! produce false positives.

use std::sync::LazyLock;

use regex::Regex;

/// Specifiers assumed present in every consuming project, never reported
/// as dependencies
pub const ALWAYS_AVAILABLE: &[&str] = &["lit", "tslib"];

/// The library's own package name, never reported as a dependency
pub const LIBRARY_PACKAGE: &str = "@inlay/ui";

static BLOCK_COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern"));

static LINE_COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*//.*$").expect("line comment pattern"));

// One combined pattern for both declaration forms. The import clause cannot
// contain quotes, so `[^'"]*?` never crosses into a neighboring statement.
static IMPORT_SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s+(?:[^'"]*?\bfrom\s*)?['"]([^'"]+)['"]"#).expect("import pattern")
});

/// Remove block comments and full-line `//` comments
pub fn strip_comments(source: &str) -> String {
    let without_blocks = BLOCK_COMMENTS.replace_all(source, "");
    LINE_COMMENTS.replace_all(&without_blocks, "").into_owned()
}

/// Extract every import specifier from a file's text, in order of appearance
pub fn extract_imports(source: &str) -> Vec<String> {
    let stripped = strip_comments(source);
    IMPORT_SPECIFIER
        .captures_iter(&stripped)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// A specifier is local when it refers into the tree via a relative path
pub fn is_local(specifier: &str) -> bool {
    specifier.starts_with('.')
}

/// Normalize an external specifier to its package identifier: scoped
/// specifiers keep their first two path segments, unscoped keep the first.
pub fn normalize_package(specifier: &str) -> String {
    let mut segments = specifier.split('/');
    if specifier.starts_with('@') {
        match (segments.next(), segments.next()) {
            (Some(scope), Some(name)) => format!("{scope}/{name}"),
            (Some(scope), None) => scope.to_string(),
            _ => specifier.to_string(),
        }
    } else {
        segments.next().unwrap_or(specifier).to_string()
    }
}
