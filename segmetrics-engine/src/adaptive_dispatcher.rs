//! Adaptive execution dispatcher
//!
//! Selects the execution strategy for a batch from its size and the engine
//! configuration.

use crate::{
    config::EngineConfig,
    decoder::ImageDecoder,
    error::{PairResult, Result},
    executor::{auto_select, ExecutionMode, Executor, ProgressFn, SequentialExecutor},
    pairing::PairJob,
};
use segmetrics_core::MetricRecord;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Adaptive execution dispatcher
pub struct AdaptiveDispatcher {
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: ParallelExecutor,
    config: EngineConfig,
}

impl AdaptiveDispatcher {
    /// Create a new adaptive dispatcher with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self {
            sequential_executor: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel_executor: ParallelExecutor::new(config.threads),
            config,
        }
    }

    /// Mode that will actually run for `pair_count` pairs
    pub fn select_mode(&self, pair_count: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(pair_count, self.config.parallel_threshold),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            mode => mode,
        }
    }

    /// Run `jobs` with the selected executor, returning the mode used
    pub fn dispatch(
        &self,
        jobs: &[PairJob],
        decoder: &dyn ImageDecoder,
        progress: Option<ProgressFn<'_>>,
    ) -> Result<(ExecutionMode, Vec<PairResult<MetricRecord>>)> {
        let mode = self.select_mode(jobs.len());
        let outcomes = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel_executor.run(jobs, decoder, progress)?,
            _ => self.sequential_executor.run(jobs, decoder, progress)?,
        };
        Ok((mode, outcomes))
    }
}
