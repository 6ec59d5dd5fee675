//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;

pub mod evaluate;
pub mod generate_config;
pub mod locate;
pub mod page;
pub mod show;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score segmentations against ground-truth masks
    Evaluate(evaluate::EvaluateArgs),

    /// Print the metrics stored by the last evaluation
    Show(show::ShowArgs),

    /// Print one page of the comparison view as JSON
    Page(page::PageArgs),

    /// Resolve an image path or /image-files/ URL to a file
    Locate(locate::LocateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print every output format with a short description
    pub fn print_formats() -> Result<()> {
        println!("Available output formats:");
        for format in OutputFormat::ALL {
            println!("  {:<10} {}", format.as_str(), format.description());
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
