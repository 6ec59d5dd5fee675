//! Sequential execution strategy

use crate::{
    decoder::ImageDecoder,
    error::{PairResult, Result},
    executor::{evaluate_pair, ExecutionMode, Executor, ProgressFn},
    pairing::PairJob,
};
use segmetrics_core::MetricRecord;

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn run(
        &self,
        jobs: &[PairJob],
        decoder: &dyn ImageDecoder,
        progress: Option<ProgressFn<'_>>,
    ) -> Result<Vec<PairResult<MetricRecord>>> {
        let outcomes = jobs
            .iter()
            .map(|job| {
                let outcome = evaluate_pair(job, decoder);
                if let Some(progress) = progress {
                    progress(job.index);
                }
                outcome
            })
            .collect();

        Ok(outcomes)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
