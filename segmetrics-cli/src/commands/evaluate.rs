//! Evaluate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_inputs;
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use segmetrics_api::{
    BatchResult, DirectorySource, Evaluator, ExecutionMode, ImageKind, ResultStore,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the evaluate command
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Image tree root holding the mask and segmentation folders
    #[arg(short, long, value_name = "DIR", conflicts_with = "masks")]
    pub root: Option<PathBuf>,

    /// Ground-truth masks: directories, files or glob patterns
    #[arg(short, long, value_name = "PATH/PATTERN", num_args = 1.., requires = "segments")]
    pub masks: Vec<String>,

    /// Predicted segmentations: directories, files or glob patterns
    #[arg(short, long, value_name = "PATH/PATTERN", num_args = 1.., requires = "masks")]
    pub segments: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Metric store to replace with the results
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Do not write the metric store
    #[arg(long, conflicts_with = "store")]
    pub no_store: bool,

    /// Force parallel evaluation even for small batches
    #[arg(short, long, conflicts_with = "sequential")]
    pub parallel: bool,

    /// Evaluate pairs one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        log::info!("Starting mask evaluation");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let eval_config = config
            .performance
            .evaluation_config(self.execution_mode(), self.threads)?;
        log::info!(
            "Execution mode {:?}, {} worker thread(s)",
            eval_config.execution_mode(),
            eval_config.threads().unwrap_or_else(num_cpus::get)
        );
        let evaluator = Evaluator::with_config(eval_config).map_err(CliError::from)?;

        let (masks, segments) = self.collect_inputs(&config)?;
        log::info!(
            "Found {} mask(s) and {} segmentation(s)",
            masks.len(),
            segments.len()
        );

        let mut reporter = ProgressReporter::new(self.quiet);
        reporter.init_pairs(masks.len().min(segments.len()) as u64);
        let progress = |index: usize| reporter.pair_completed(index);
        let result = evaluator
            .evaluate_paths_with_progress(&masks, &segments, &progress)
            .map_err(CliError::from)?;
        reporter.finish();

        if !self.no_store {
            let store = config.output.store(self.store.as_deref());
            store.replace(&result.records).map_err(CliError::from)?;
            log::info!("Stored metrics in {}", store.path().display());
        }

        self.write_output(&config, &result)?;
        self.report_summary(&result);
        Ok(())
    }

    fn execution_mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else if self.sequential {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Adaptive
        }
    }

    /// Explicit lists when given, otherwise the configured image tree
    fn collect_inputs(&self, config: &CliConfig) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        if !self.masks.is_empty() {
            let masks = resolve_inputs(&self.masks).context("Failed to resolve masks")?;
            let segments =
                resolve_inputs(&self.segments).context("Failed to resolve segmentations")?;
            return Ok((masks, segments));
        }

        let source = config.layout.image_directory(self.root.as_deref());
        let masks = source
            .list(ImageKind::Mask)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        let segments = source
            .list(ImageKind::Segmented)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        Ok((masks, segments))
    }

    fn write_output(&self, config: &CliConfig, result: &BatchResult) -> Result<()> {
        let format = config.output.format(self.format)?;

        let mut formatter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                format.formatter(BufWriter::new(file), config.output.pretty_json)
            }
            None => format.formatter(io::stdout(), config.output.pretty_json),
        };
        crate::output::write_records(formatter.as_mut(), &result.records)
    }

    fn report_summary(&self, result: &BatchResult) {
        if self.quiet {
            return;
        }
        eprintln!(
            "Scored {} of {} pair(s) in {:.1} ms",
            result.records.len(),
            result.metadata.pairs_considered,
            result.metadata.processing_time_ms
        );
        for skipped in &result.skipped {
            eprintln!(
                "  skipped {} / {}: {}",
                skipped.mask_path.display(),
                skipped.segment_path.display(),
                skipped.reason
            );
        }
        let unmatched = result.metadata.unmatched_masks + result.metadata.unmatched_segments;
        if unmatched > 0 {
            eprintln!("  {unmatched} unmatched file(s) ignored");
        }
    }
}
