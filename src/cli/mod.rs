//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add: Add command arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod completions;
pub mod list;
pub mod show;

pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use show::ShowArgs;

/// Inlay - copy-in component installer
///
/// Copies components out of the Inlay UI source tree into your own codebase.
#[derive(Parser, Debug)]
#[command(
    name = "inlay",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Copy-in installer for the Inlay web component library",
    long_about = "Inlay copies components, their transitive local dependencies and the shared \
                  styles they reference out of the library source tree into your own project, \
                  and tells you which third-party packages are still needed.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  inlay add badge                \x1b[90m# Copy one component into your project\x1b[0m\n   \
                  inlay add badge switch --force \x1b[90m# Overwrite files you already have\x1b[0m\n   \
                  inlay add --all --dry-run      \x1b[90m# Preview everything without writing\x1b[0m\n   \
                  inlay list                     \x1b[90m# List installable components\x1b[0m\n   \
                  inlay show badge               \x1b[90m# Show a component's files and packages\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Library source root (defaults to ./src)
    #[arg(long, short = 'r', global = true, env = "INLAY_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy components into your project
    Add(AddArgs),

    /// List installable components
    List(ListArgs),

    /// Show a component's dependency closure
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
