use clap::Parser;
use std::path::PathBuf;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Copy one component:\n    inlay add badge\n\n\
                   Copy several at once:\n    inlay add badge switch slider\n\n\
                   Copy everything:\n    inlay add --all\n\n\
                   Pick a destination and remember it:\n    inlay add badge --dest lib/widgets --save-dest\n\n\
                   Preview without writing:\n    inlay add badge --dry-run")]
pub struct AddArgs {
    /// Component names to copy ("all" copies every installable component).
    /// Runs an interactive picker when omitted.
    pub components: Vec<String>,

    /// Copy every installable component
    #[arg(long)]
    pub all: bool,

    /// Destination directory (defaults to inlay.yaml's destination, then src/components)
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Overwrite files that already exist in the destination
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Show what would be copied without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Record the effective destination in inlay.yaml for future runs
    #[arg(long)]
    pub save_dest: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_add() {
        let cli = super::super::Cli::try_parse_from(["inlay", "add", "badge"]).unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            super::super::Commands::Add(args) => {
                assert_eq!(args.components, vec!["badge"]);
                assert!(!args.all);
                assert!(!args.force);
                assert!(!args.dry_run);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_multiple() {
        let cli = super::super::Cli::try_parse_from(["inlay", "add", "badge", "switch", "slider"])
            .unwrap_or_else(|e| {
                panic!("Failed to parse CLI arguments: {}", e);
            });
        match cli.command {
            super::super::Commands::Add(args) => {
                assert_eq!(args.components, vec!["badge", "switch", "slider"]);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_no_names() {
        let cli = super::super::Cli::try_parse_from(["inlay", "add"]).unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            super::super::Commands::Add(args) => {
                assert!(args.components.is_empty());
                assert!(!args.all);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_with_options() {
        let cli = super::super::Cli::try_parse_from([
            "inlay",
            "add",
            "badge",
            "--dest",
            "lib/widgets",
            "--force",
            "--save-dest",
        ])
        .unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            super::super::Commands::Add(args) => {
                assert_eq!(args.dest, Some(PathBuf::from("lib/widgets")));
                assert!(args.force);
                assert!(args.save_dest);
                assert!(!args.dry_run);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_all_dry_run() {
        let cli = super::super::Cli::try_parse_from(["inlay", "add", "--all", "--dry-run"])
            .unwrap_or_else(|e| {
                panic!("Failed to parse CLI arguments: {}", e);
            });
        match cli.command {
            super::super::Commands::Add(args) => {
                assert!(args.all);
                assert!(args.dry_run);
                assert!(args.components.is_empty());
            }
            _ => panic!("Expected Add command"),
        }
    }
}
