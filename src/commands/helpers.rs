//! Shared helpers for command implementations

use std::path::PathBuf;

use console::Style;

use crate::catalog::Catalog;
use crate::error::Result;

/// Source root used when neither --root nor INLAY_ROOT is given
pub const DEFAULT_ROOT: &str = "src";

/// Build the catalog from the CLI-selected source root
pub fn open_catalog(root: Option<PathBuf>) -> Result<Catalog> {
    let root = root.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    Catalog::scan(&root)
}

/// Print every installable name, the self-correction aid after an unknown
/// component request
pub fn print_available(catalog: &Catalog) {
    println!("{}", Style::new().bold().apply_to("Available components:"));
    for name in catalog.installable() {
        println!("  {name}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_catalog_with_explicit_root() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("ui-badge")).unwrap();
        let catalog = open_catalog(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(catalog.resolve("badge"), Some("ui-badge"));
    }

    #[test]
    fn test_open_catalog_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let result = open_catalog(Some(temp.path().join("nope")));
        assert!(result.is_err());
    }
}
