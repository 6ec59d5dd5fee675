//! Configuration types for the engine

use crate::error::{BatchError, Result};
use crate::ExecutionMode;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of worker threads for parallel execution (None = rayon's global pool)
    pub threads: Option<usize>,
    /// Minimum number of pairs before adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 8,
        }
    }
}

impl EngineConfig {
    /// Always evaluate pairs one after another
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX,
        }
    }

    /// Go parallel as soon as there are two pairs
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 2,
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Reject settings the executors cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(BatchError::InvalidConfig(
                "thread count must be greater than 0".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(BatchError::InvalidConfig(
                "parallel threshold must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
