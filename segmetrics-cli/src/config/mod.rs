//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use segmetrics_api::{Config, ExecutionMode, ImageDirectory, ImageKind, JsonFileStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Image tree layout
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Read a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// [`CliConfig::load`] when a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Where the three image collections live
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Root of the image tree
    pub root: PathBuf,
    /// Originals subdirectory
    pub original: String,
    /// Predicted segmentations subdirectory
    pub segmented: String,
    /// Ground-truth masks subdirectory
    pub mask: String,
}

impl LayoutConfig {
    /// Directory collaborator for this layout, optionally at another root
    pub fn image_directory(&self, root: Option<&Path>) -> ImageDirectory {
        let root = root.unwrap_or(&self.root);
        ImageDirectory::new(root)
            .with_subdir(ImageKind::Original, &self.original)
            .with_subdir(ImageKind::Segmented, &self.segmented)
            .with_subdir(ImageKind::Mask, &self.mask)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(ImageDirectory::DEFAULT_ROOT),
            original: ImageDirectory::DEFAULT_ORIGINAL.to_string(),
            segmented: ImageDirectory::DEFAULT_SEGMENTED.to_string(),
            mask: ImageDirectory::DEFAULT_MASK.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Where evaluated metrics are stored
    pub store: PathBuf,
}

impl OutputConfig {
    /// Metric store at `path`, or the configured one
    pub fn store(&self, path: Option<&Path>) -> JsonFileStore {
        JsonFileStore::new(path.unwrap_or(&self.store)).pretty(self.pretty_json)
    }

    /// `requested` when given, otherwise the configured default format
    pub fn format(&self, requested: Option<OutputFormat>) -> Result<OutputFormat, CliError> {
        match requested {
            Some(format) => Ok(format),
            None => OutputFormat::from_name(&self.default_format).ok_or_else(|| {
                CliError::ConfigError(format!("unknown output format: {}", self.default_format))
            }),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            store: PathBuf::from(JsonFileStore::DEFAULT_PATH),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Pair count from which adaptive mode goes parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Build the evaluation configuration, letting command-line values win
    pub fn evaluation_config(
        &self,
        mode: ExecutionMode,
        threads: Option<usize>,
    ) -> Result<Config, CliError> {
        let threads = threads.or(match self.worker_threads {
            0 => None,
            n => Some(n),
        });

        Config::builder()
            .execution_mode(mode)
            .threads(threads)
            .parallel_threshold(self.parallel_threshold)
            .build()
            .map_err(CliError::from)
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 8,
            worker_threads: 0,
        }
    }
}
