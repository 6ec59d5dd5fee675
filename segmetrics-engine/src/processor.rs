//! Batch evaluator and builder
//!
//! Turns two ordered path lists into an ordered [`BatchResult`]. A pair that
//! fails to decode or has mismatched shapes is logged, recorded in
//! [`BatchResult::skipped`] and left out of the records; the batch itself
//! keeps going.

use crate::{
    adaptive_dispatcher::AdaptiveDispatcher,
    config::EngineConfig,
    decoder::{FsImageDecoder, ImageDecoder},
    error::Result,
    executor::{ExecutionMode, ProgressFn},
    pairing::pair_by_position,
};
use segmetrics_core::{CoreError, MetricRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// A pairing that produced no record
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPair {
    /// Position in the pairing
    pub index: usize,
    /// Ground-truth mask path
    pub mask_path: PathBuf,
    /// Segmentation path
    pub segment_path: PathBuf,
    /// Why the pair was skipped
    pub reason: CoreError,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
pub struct BatchMetadata {
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Number of positional pairs formed
    pub pairs_considered: usize,
    /// Trailing masks that had no segmentation
    pub unmatched_masks: usize,
    /// Trailing segmentations that had no mask
    pub unmatched_segments: usize,
    /// Wall-clock time in milliseconds
    pub processing_time_ms: f64,
}

/// Ordered outcome of one comparison run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    /// Scored pairs, in pairing order
    pub records: Vec<MetricRecord>,
    /// Pairs left out, in pairing order
    pub skipped: Vec<SkippedPair>,
    /// Processing metadata
    pub metadata: BatchMetadata,
}

impl BatchResult {
    /// Drop the metadata and keep the records
    pub fn into_records(self) -> Vec<MetricRecord> {
        self.records
    }

    /// Whether every formed pair produced a record
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Evaluates mask/segmentation batches
pub struct BatchEvaluator {
    dispatcher: AdaptiveDispatcher,
    decoder: Arc<dyn ImageDecoder>,
    config: EngineConfig,
}

impl BatchEvaluator {
    /// Create an evaluator with default configuration reading from disk
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create an evaluator with custom configuration reading from disk
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Self::with_decoder(config, Arc::new(FsImageDecoder))
    }

    /// Create an evaluator with a custom image-decode collaborator
    pub fn with_decoder(config: EngineConfig, decoder: Arc<dyn ImageDecoder>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            dispatcher: AdaptiveDispatcher::new(config.clone()),
            decoder,
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare `masks[i]` against `segments[i]` for every common index
    ///
    /// Both lists must already be sorted; trailing unmatched entries are
    /// ignored.
    pub fn evaluate<M, S>(&self, masks: &[M], segments: &[S]) -> Result<BatchResult>
    where
        M: AsRef<Path>,
        S: AsRef<Path>,
    {
        self.evaluate_with_progress(masks, segments, None)
    }

    /// [`BatchEvaluator::evaluate`] with a per-pair progress callback
    pub fn evaluate_with_progress<M, S>(
        &self,
        masks: &[M],
        segments: &[S],
        progress: Option<ProgressFn<'_>>,
    ) -> Result<BatchResult>
    where
        M: AsRef<Path>,
        S: AsRef<Path>,
    {
        let start = Instant::now();
        let pairing = pair_by_position(masks, segments);

        if pairing.unmatched_masks > 0 || pairing.unmatched_segments > 0 {
            log::info!(
                "Ignoring {} unmatched mask(s) and {} unmatched segmentation(s)",
                pairing.unmatched_masks,
                pairing.unmatched_segments
            );
        }
        for job in pairing.jobs.iter().filter(|job| job.stems_differ()) {
            log::debug!(
                "Pair {} joins differently named files: {} / {}",
                job.index,
                job.mask_path.display(),
                job.segment_path.display()
            );
        }

        let (execution_mode, outcomes) =
            self.dispatcher
                .dispatch(&pairing.jobs, self.decoder.as_ref(), progress)?;

        let mut records = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();
        for (job, outcome) in pairing.jobs.iter().zip(outcomes) {
            match outcome {
                Ok(record) => records.push(record),
                Err(reason) => {
                    log::warn!("Skipping pair {}: {}", job.index, reason);
                    skipped.push(SkippedPair {
                        index: job.index,
                        mask_path: job.mask_path.clone(),
                        segment_path: job.segment_path.clone(),
                        reason,
                    });
                }
            }
        }

        let metadata = BatchMetadata {
            execution_mode,
            pairs_considered: pairing.jobs.len(),
            unmatched_masks: pairing.unmatched_masks,
            unmatched_segments: pairing.unmatched_segments,
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        log::info!(
            "Scored {} of {} pair(s) in {:.1} ms ({:?})",
            records.len(),
            metadata.pairs_considered,
            metadata.processing_time_ms,
            metadata.execution_mode
        );

        Ok(BatchResult {
            records,
            skipped,
            metadata,
        })
    }
}

/// Builder for BatchEvaluator
pub struct BatchEvaluatorBuilder {
    config: EngineConfig,
    decoder: Arc<dyn ImageDecoder>,
}

impl Default for BatchEvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchEvaluatorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            decoder: Arc::new(FsImageDecoder),
        }
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive parallel threshold (in pairs)
    pub fn parallel_threshold(mut self, pairs: usize) -> Self {
        self.config.parallel_threshold = pairs;
        self
    }

    /// Replace the image-decode collaborator
    pub fn decoder(mut self, decoder: Arc<dyn ImageDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Build the evaluator
    pub fn build(self) -> Result<BatchEvaluator> {
        BatchEvaluator::with_decoder(self.config, self.decoder)
    }
}
