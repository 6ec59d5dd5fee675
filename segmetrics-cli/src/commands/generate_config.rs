//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Self::generate_template();

        let Some(output) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        if output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                output.display()
            );
        }
        std::fs::write(output, template)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration template written to {}", output.display());
        println!();
        println!("Use it with:");
        println!("   segmetrics evaluate --config {}", output.display());
        Ok(())
    }

    /// Generate template configuration content
    pub fn generate_template() -> String {
        r#"# segmetrics configuration

# Image tree: <root>/<original>, <root>/<segmented>, <root>/<mask>
[layout]
root = "imagens"
original = "original"
segmented = "segmentado"
mask = "mascara"

[output]
# text, json or markdown
default_format = "text"
pretty_json = true
# File replaced by every evaluate run
store = "metricas.json"

[performance]
# Pair count from which adaptive mode evaluates in parallel
parallel_threshold = 8
# Number of worker threads (0 = one per CPU)
worker_threads = 0
"#
        .to_string()
    }
}
