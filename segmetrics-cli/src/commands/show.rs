//! Show command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use segmetrics_api::ResultStore;
use std::io;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Metric store to read
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let store = config.output.store(self.store.as_deref());
        let records = store.load().map_err(CliError::from)?;

        let format = config.output.format(self.format)?;

        let mut formatter = format.formatter(io::stdout(), config.output.pretty_json);
        output::write_records(formatter.as_mut(), &records)
    }
}
