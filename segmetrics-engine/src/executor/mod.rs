//! Execution strategies for a batch of pair jobs

use crate::{
    decoder::ImageDecoder,
    error::{PairResult, Result},
    pairing::PairJob,
};
use segmetrics_core::{binarize, compare, MetricRecord};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One pair after another on the calling thread
    Sequential,
    /// Pairs spread over a rayon worker pool
    Parallel,
    /// Pick sequential or parallel from the batch size
    Adaptive,
}

/// Callback invoked once per finished pair with that pair's index
pub type ProgressFn<'a> = &'a (dyn Fn(usize) + Sync);

/// Trait for execution strategies
///
/// Implementations must return one outcome per job, in job order.
pub trait Executor: Send + Sync {
    /// Evaluate every job
    fn run(
        &self,
        jobs: &[PairJob],
        decoder: &dyn ImageDecoder,
        progress: Option<ProgressFn<'_>>,
    ) -> Result<Vec<PairResult<MetricRecord>>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Decode, binarize and compare a single pair
///
/// Each raster is dropped as soon as its mask exists.
pub fn evaluate_pair(job: &PairJob, decoder: &dyn ImageDecoder) -> PairResult<MetricRecord> {
    let truth = binarize(&decoder.decode(&job.mask_path)?);
    let predicted = binarize(&decoder.decode(&job.segment_path)?);
    compare(&truth, &predicted, &job.mask_name(), &job.segment_name())
}

/// Resolve adaptive mode from the number of pairs
pub fn auto_select(pair_count: usize, threshold: usize) -> ExecutionMode {
    if pair_count < 2 || pair_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
