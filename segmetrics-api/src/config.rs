//! High-level configuration API

use crate::error::{ApiError, Result};
use segmetrics_engine::{EngineConfig, ExecutionMode};

/// High-level configuration for batch evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    inner: EngineConfig,
}

impl Config {
    /// Evaluate pairs one at a time
    pub fn sequential() -> Self {
        Self {
            inner: EngineConfig::sequential(),
        }
    }

    /// Create a fast configuration
    pub fn fast() -> Self {
        Self {
            inner: EngineConfig::fast(),
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Engine settings backing this configuration
    pub fn engine(&self) -> &EngineConfig {
        &self.inner
    }

    /// Configured thread count, if any
    pub fn threads(&self) -> Option<usize> {
        self.inner.threads
    }

    /// Configured execution mode
    pub fn execution_mode(&self) -> ExecutionMode {
        self.inner.execution_mode
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.inner.threads = threads;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.inner.execution_mode = mode;
        self
    }

    /// Set the number of pairs from which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, pairs: usize) -> Self {
        self.config.inner.parallel_threshold = pairs;
        self
    }

    /// Use sequential configuration
    pub fn sequential(mut self) -> Self {
        self.config.inner = EngineConfig::sequential();
        self
    }

    /// Use fast configuration
    pub fn fast(mut self) -> Self {
        self.config.inner = EngineConfig::fast();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config
            .inner
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self.config)
    }
}
