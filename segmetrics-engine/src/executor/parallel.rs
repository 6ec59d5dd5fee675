//! Parallel execution strategy

use crate::{
    decoder::ImageDecoder,
    error::{BatchError, PairResult, Result},
    executor::{evaluate_pair, ExecutionMode, Executor, ProgressFn},
    pairing::PairJob,
};
use rayon::prelude::*;
use segmetrics_core::MetricRecord;

/// Parallel multi-threaded executor
///
/// Pairs share no state, so each job runs independently; `collect` on an
/// indexed parallel iterator keeps the outcomes in job order.
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a new parallel executor; `None` uses rayon's global pool
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    fn run_in_pool(
        jobs: &[PairJob],
        decoder: &dyn ImageDecoder,
        progress: Option<ProgressFn<'_>>,
    ) -> Vec<PairResult<MetricRecord>> {
        jobs.par_iter()
            .map(|job| {
                let outcome = evaluate_pair(job, decoder);
                if let Some(progress) = progress {
                    progress(job.index);
                }
                outcome
            })
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn run(
        &self,
        jobs: &[PairJob],
        decoder: &dyn ImageDecoder,
        progress: Option<ProgressFn<'_>>,
    ) -> Result<Vec<PairResult<MetricRecord>>> {
        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| BatchError::ThreadPool(e.to_string()))?;
                Ok(pool.install(|| Self::run_in_pool(jobs, decoder, progress)))
            }
            None => Ok(Self::run_in_pool(jobs, decoder, progress)),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::MemoryDecoder;
    use crate::executor::SequentialExecutor;
    use crate::pairing::pair_by_position;
    use image::{DynamicImage, GrayImage};
    use segmetrics_core::RasterImage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn decoder_with(count: usize) -> (MemoryDecoder, Vec<String>, Vec<String>) {
        let mut decoder = MemoryDecoder::new();
        let mut masks = Vec::new();
        let mut segments = Vec::new();
        for i in 0..count {
            let mask = format!("gt/{i:03}.png");
            let segment = format!("seg/{i:03}.png");
            // prediction grows with i so every record differs
            let truth = GrayImage::from_fn(8, 8, |x, _| image::Luma([if x < 4 { 255 } else { 0 }]));
            let predicted = GrayImage::from_fn(8, 8, |x, y| {
                image::Luma([if (y * 8 + x) as usize <= i { 255 } else { 0 }])
            });
            decoder.insert(&mask, RasterImage::new(DynamicImage::ImageLuma8(truth)));
            decoder.insert(&segment, RasterImage::new(DynamicImage::ImageLuma8(predicted)));
            masks.push(mask);
            segments.push(segment);
        }
        (decoder, masks, segments)
    }

    #[test]
    fn test_parallel_matches_sequential_order() {
        let (decoder, masks, segments) = decoder_with(24);
        let pairing = pair_by_position(&masks, &segments);

        let sequential = SequentialExecutor
            .run(&pairing.jobs, &decoder, None)
            .unwrap();
        let parallel = ParallelExecutor::new(Some(4))
            .run(&pairing.jobs, &decoder, None)
            .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(
            parallel[5].as_ref().unwrap().segment_name,
            "005.png".to_string()
        );
    }

    #[test]
    fn test_progress_called_once_per_job() {
        let (decoder, masks, segments) = decoder_with(10);
        let pairing = pair_by_position(&masks, &segments);
        let seen = AtomicUsize::new(0);
        let progress = |_index: usize| {
            seen.fetch_add(1, Ordering::SeqCst);
        };

        ParallelExecutor::default()
            .run(&pairing.jobs, &decoder, Some(&progress))
            .unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 10);
    }
}
