//! Inlay - copy-in component installer
//!
//! Copies components from the Inlay UI library source tree into a consumer
//! project, together with their transitive local dependencies and shared
//! styles, and reports the third-party packages the consumer still needs to
//! install. "Copy, don't import": installed files become the consumer's own.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod config;
mod error;
mod installer;
mod operations;
mod progress;
mod resolver;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(cli.root, cli.verbose, args),
        Commands::List(args) => commands::list::run(cli.root, args),
        Commands::Show(args) => commands::show::run(cli.root, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
