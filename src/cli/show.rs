use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Component name to inspect
    pub name: String,

    /// Emit the closure as JSON
    #[arg(long)]
    pub json: bool,
}
