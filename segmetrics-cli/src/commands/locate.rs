//! Locate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use segmetrics_api::locate_image;
use std::path::PathBuf;

/// Arguments for the locate command
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Relative image path or /image-files/ URL
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Directory the image URLs are relative to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub base: PathBuf,
}

impl LocateArgs {
    /// Execute the locate command
    pub fn execute(&self) -> Result<()> {
        let found = locate_image(&self.base, &self.path).map_err(CliError::from)?;
        println!("{}", found.display());
        Ok(())
    }
}
