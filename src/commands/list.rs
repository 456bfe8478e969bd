//! List command implementation
//!
//! Lists every component a consumer may request directly, with the number of
//! files sitting in its folder. Internal `-core` components and the shared
//! styles folder never appear here; they only ride along transitively.

use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::error::{InlayError, Result};
use crate::resolver::component_files;

use super::helpers;

/// Run list command
pub fn run(root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let catalog = helpers::open_catalog(root)?;
    let installable = catalog.installable();

    if args.json {
        let entries: Vec<serde_json::Value> = installable
            .iter()
            .map(|name| {
                let folder = catalog.resolve(name).unwrap_or(name.as_str());
                serde_json::json!({
                    "name": name,
                    "folder": folder,
                    "files": component_files(&catalog.folder_path(folder)).len(),
                })
            })
            .collect();
        let rendered =
            serde_json::to_string_pretty(&entries).map_err(|e| InlayError::IoError {
                message: format!("Failed to render JSON: {}", e),
            })?;
        println!("{rendered}");
        return Ok(());
    }

    if installable.is_empty() {
        println!("No installable components.");
        return Ok(());
    }

    println!("Installable components ({}):", installable.len());
    println!();

    for name in &installable {
        let folder = catalog.resolve(name).unwrap_or(name.as_str());
        let file_count = component_files(&catalog.folder_path(folder)).len();
        println!(
            "  {}  {}",
            Style::new().bold().yellow().apply_to(name),
            Style::new().dim().apply_to(format!(
                "({} file{})",
                file_count,
                if file_count == 1 { "" } else { "s" }
            ))
        );
    }

    Ok(())
}
