//! Batch orchestration for mask comparisons
//!
//! This crate pairs ground-truth masks with predicted segmentations by
//! position, evaluates each pair through `segmetrics-core`, and collects the
//! records in pairing order, optionally across a rayon worker pool.

#![warn(missing_docs)]

pub mod adaptive_dispatcher;
pub mod config;
pub mod decoder;
pub mod error;
pub mod executor;
pub mod pairing;
pub mod processor;

// Re-export key types
pub use adaptive_dispatcher::AdaptiveDispatcher;
pub use config::EngineConfig;
pub use decoder::{FsImageDecoder, ImageDecoder, MemoryDecoder};
pub use error::{BatchError, PairResult, Result};
pub use executor::{ExecutionMode, Executor, ProgressFn};
pub use pairing::{display_name, pair_by_position, PairJob, Pairing};
pub use processor::{BatchEvaluator, BatchEvaluatorBuilder, BatchMetadata, BatchResult, SkippedPair};

// Re-export from core for convenience
pub use segmetrics_core::{CoreError, MetricRecord};
