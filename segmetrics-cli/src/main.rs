//! segmetrics command-line entry point

use anyhow::Result;
use clap::Parser;
use segmetrics_cli::commands::{Commands, ListCommands};

/// Score predicted segmentation masks against ground truth
#[derive(Debug, Parser)]
#[command(name = "segmetrics", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate(args) => args.execute(),
        Commands::Show(args) => args.execute(),
        Commands::Page(args) => args.execute(),
        Commands::Locate(args) => args.execute(),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Formats => ListCommands::print_formats(),
        },
        Commands::GenerateConfig(args) => args.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_evaluate() {
        let cli = Cli::try_parse_from(["segmetrics", "evaluate", "--root", "data", "-vv"]).unwrap();
        match cli.command {
            Commands::Evaluate(args) => {
                assert_eq!(args.root.as_deref(), Some(std::path::Path::new("data")));
                assert_eq!(args.verbose, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_masks_require_segments() {
        let result = Cli::try_parse_from(["segmetrics", "evaluate", "--masks", "gt/*.png"]);
        assert!(result.is_err());
    }
}
