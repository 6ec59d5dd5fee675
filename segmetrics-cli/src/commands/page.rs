//! Page command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use segmetrics_api::{comparison_page, DEFAULT_PER_PAGE};
use std::path::PathBuf;

/// Arguments for the page command
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Image tree root
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Metric store to read
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Entries per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: usize,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl PageArgs {
    /// Execute the page command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let source = config.layout.image_directory(self.root.as_deref());
        let store = config.output.store(self.store.as_deref());

        let page = comparison_page(&source, &store, self.page, self.per_page)
            .map_err(CliError::from)?;

        let json = if config.output.pretty_json {
            serde_json::to_string_pretty(&page)?
        } else {
            serde_json::to_string(&page)?
        };
        println!("{json}");
        Ok(())
    }
}
