//! Public API for segmetrics mask evaluation
//!
//! This crate wraps the batch engine behind a small, stable surface:
//! evaluate explicit path lists or a whole image tree, persist the result
//! set, and page through it for display.

#![warn(missing_docs)]

pub mod config;
pub mod directory;
pub mod dto;
pub mod error;
pub mod files;
pub mod store;

use error::Result;
use segmetrics_engine::{BatchEvaluator, ImageDecoder, ProgressFn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use directory::{DirectorySource, ImageDirectory, ImageKind};
pub use dto::{image_url, ComparisonPage, PageSource, DEFAULT_PER_PAGE, IMAGE_URL_PREFIX};
pub use error::ApiError;
pub use files::locate_image;
pub use segmetrics_core::MetricRecord;
pub use segmetrics_engine::{BatchMetadata, BatchResult, ExecutionMode, SkippedPair};
pub use store::{JsonFileStore, MemoryStore, ResultStore};

/// Main entry point for mask evaluation
pub struct Evaluator {
    inner: BatchEvaluator,
    config: Config,
}

impl Evaluator {
    /// Create an evaluator with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an evaluator with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = BatchEvaluator::with_config(config.engine().clone())?;
        Ok(Self { inner, config })
    }

    /// Create an evaluator that reads images through `decoder`
    pub fn with_decoder(config: Config, decoder: Arc<dyn ImageDecoder>) -> Result<Self> {
        let inner = BatchEvaluator::with_decoder(config.engine().clone(), decoder)?;
        Ok(Self { inner, config })
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compare `masks[i]` with `segments[i]` for every common index
    pub fn evaluate_paths<M, S>(&self, masks: &[M], segments: &[S]) -> Result<BatchResult>
    where
        M: AsRef<Path>,
        S: AsRef<Path>,
    {
        Ok(self.inner.evaluate(masks, segments)?)
    }

    /// [`Evaluator::evaluate_paths`] reporting each finished pair
    pub fn evaluate_paths_with_progress<M, S>(
        &self,
        masks: &[M],
        segments: &[S],
        progress: ProgressFn<'_>,
    ) -> Result<BatchResult>
    where
        M: AsRef<Path>,
        S: AsRef<Path>,
    {
        Ok(self
            .inner
            .evaluate_with_progress(masks, segments, Some(progress))?)
    }

    /// Compare the mask collection of `source` with its segmentations
    pub fn evaluate_directory(&self, source: &dyn DirectorySource) -> Result<BatchResult> {
        let (masks, segments) = Self::list_pairs(source)?;
        self.evaluate_paths(&masks, &segments)
    }

    /// [`Evaluator::evaluate_directory`] reporting each finished pair
    pub fn evaluate_directory_with_progress(
        &self,
        source: &dyn DirectorySource,
        progress: ProgressFn<'_>,
    ) -> Result<BatchResult> {
        let (masks, segments) = Self::list_pairs(source)?;
        self.evaluate_paths_with_progress(&masks, &segments, progress)
    }

    /// Re-evaluate `source` and replace the contents of `store`
    ///
    /// The store is only written once the whole batch has been scored.
    pub fn refresh(
        &self,
        source: &dyn DirectorySource,
        store: &dyn ResultStore,
    ) -> Result<BatchResult> {
        let result = self.evaluate_directory(source)?;
        store.replace(&result.records)?;
        log::info!("Stored {} metric record(s)", result.records.len());
        Ok(result)
    }

    /// Page `page` of the image tree next to the stored metrics
    pub fn comparison_page(
        &self,
        source: &dyn DirectorySource,
        store: &dyn ResultStore,
        page: usize,
        per_page: usize,
    ) -> Result<ComparisonPage> {
        comparison_page(source, store, page, per_page)
    }

    fn list_pairs(source: &dyn DirectorySource) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let masks = source.list(ImageKind::Mask)?;
        let segments = source.list(ImageKind::Segmented)?;
        Ok((masks, segments))
    }
}

/// Page through `source` with metrics read from `store`
///
/// Needs no evaluator: the metrics are whatever the last refresh stored.
pub fn comparison_page(
    source: &dyn DirectorySource,
    store: &dyn ResultStore,
    page: usize,
    per_page: usize,
) -> Result<ComparisonPage> {
    let originals = source.list(ImageKind::Original)?;
    let masks = source.list(ImageKind::Mask)?;
    let segments = source.list(ImageKind::Segmented)?;
    let metrics = store.load()?;

    ComparisonPage::build(
        PageSource {
            originals: &originals,
            masks: &masks,
            segments: &segments,
            metrics: &metrics,
        },
        page,
        per_page,
    )
}

/// Convenience function for one-off evaluation with default settings
pub fn evaluate_paths<M, S>(masks: &[M], segments: &[S]) -> Result<Vec<MetricRecord>>
where
    M: AsRef<Path>,
    S: AsRef<Path>,
{
    let evaluator = Evaluator::new()?;
    Ok(evaluator.evaluate_paths(masks, segments)?.into_records())
}
