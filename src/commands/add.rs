//! Add command implementation
//!
//! Resolves the requested components, collects each one's dependency closure
//! and copies it into the destination, then reports per-component and total
//! counts plus the external packages the consumer still needs to install.
//! Unknown names do not stop the resolvable ones from installing, but the
//! command still fails after reporting so callers can react.

use std::path::PathBuf;

use console::Style;

use crate::cli::AddArgs;
use crate::config::{self, ProjectConfig};
use crate::error::{InlayError, Result};
use crate::installer::{FileAction, InstallOptions};
use crate::operations::{self, InstallSummary};

use super::{helpers, menu};

/// Run add command
pub fn run(root: Option<PathBuf>, verbose: bool, args: AddArgs) -> Result<()> {
    let catalog = helpers::open_catalog(root)?;

    let requested: Vec<String> = if args.all || args.components == ["all"] {
        catalog.installable()
    } else if args.components.is_empty() {
        let selected = menu::select_components(&catalog.installable())?;
        if selected.is_empty() {
            println!("Nothing selected.");
            return Ok(());
        }
        selected
    } else {
        args.components.clone()
    };

    let project_dir = std::env::current_dir().map_err(|e| InlayError::IoError {
        message: format!("Failed to get current directory: {}", e),
    })?;
    let project_config = config::load_config(&project_dir)?;
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| project_config.destination());

    let options = InstallOptions {
        force: args.force,
        dry_run: args.dry_run,
    };

    let summary = operations::install_components(&catalog, &requested, &dest, &options)?;

    if args.save_dest && !args.dry_run {
        config::save_config(
            &project_dir,
            &ProjectConfig {
                destination: Some(dest.display().to_string()),
            },
        )?;
    }

    print_summary(&summary, &options, verbose);

    if !summary.unknown.is_empty() {
        println!();
        helpers::print_available(&catalog);
        return Err(InlayError::UnknownComponents {
            names: summary.unknown.join(", "),
        });
    }

    Ok(())
}

fn print_summary(summary: &InstallSummary, options: &InstallOptions, verbose: bool) {
    let tag = if options.dry_run { "[DRY RUN] " } else { "" };

    for component in &summary.components {
        println!(
            "{}Installed {} ({} copied, {} skipped)",
            tag,
            Style::new().bold().yellow().apply_to(&component.name),
            component.report.copied,
            component.report.skipped
        );
        if verbose {
            for file in &component.report.files {
                match file.action {
                    FileAction::Copied => println!("  + {}", file.relative.display()),
                    FileAction::SkippedExisting => {
                        println!("  = {} (exists)", file.relative.display());
                    }
                }
            }
        }
    }

    println!();
    println!(
        "{}{} {} copied, {} skipped",
        tag,
        Style::new().bold().apply_to("Total:"),
        summary.copied(),
        summary.skipped()
    );

    if !summary.packages.is_empty() {
        println!();
        println!(
            "{}",
            Style::new()
                .bold()
                .apply_to("Install the required packages:")
        );
        println!("  npm install {}", summary.packages.join(" "));
    }
}
