//! Show command implementation
//!
//! Resolves one component and prints its full dependency closure, files and
//! external packages, without installing anything.

use std::path::PathBuf;

use console::Style;

use crate::cli::ShowArgs;
use crate::error::{InlayError, Result};
use crate::operations;
use crate::resolver;

use super::helpers;

/// Run show command
pub fn run(root: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let catalog = helpers::open_catalog(root)?;

    let Some(folder) = operations::is_requestable(&catalog, &args.name) else {
        helpers::print_available(&catalog);
        return Err(InlayError::UnknownComponents {
            names: args.name.clone(),
        });
    };

    let closure = resolver::collect(&catalog, &folder)?;
    let files: Vec<String> = closure
        .files
        .iter()
        .map(|file| {
            file.strip_prefix(catalog.root())
                .unwrap_or(file.as_path())
                .display()
                .to_string()
        })
        .collect();

    if args.json {
        let rendered = serde_json::to_string_pretty(&serde_json::json!({
            "name": args.name,
            "folder": folder,
            "files": files,
            "packages": closure.packages,
        }))
        .map_err(|e| InlayError::IoError {
            message: format!("Failed to render JSON: {}", e),
        })?;
        println!("{rendered}");
        return Ok(());
    }

    println!("  {}", Style::new().bold().yellow().apply_to(&args.name));
    println!("    {} {}", Style::new().bold().apply_to("Folder:"), folder);

    println!("    {}", Style::new().bold().apply_to("Files:"));
    for file in &files {
        println!("      {file}");
    }

    println!("    {}", Style::new().bold().apply_to("Packages:"));
    if closure.packages.is_empty() {
        println!("      {}", Style::new().dim().apply_to("None"));
    } else {
        for package in &closure.packages {
            println!("      {}", Style::new().cyan().apply_to(package));
        }
    }

    Ok(())
}
