//! Persistence collaborator for the last computed batch
//!
//! A store only ever holds one complete result set: `replace` overwrites
//! whatever was there, it never merges.

use crate::error::{ApiError, Result};
use segmetrics_core::MetricRecord;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Read/replace storage for metric records
pub trait ResultStore: Send + Sync {
    /// Records from the last stored run; empty when nothing was stored yet
    fn load(&self) -> Result<Vec<MetricRecord>>;

    /// Discard the stored run and keep `records` instead
    fn replace(&self, records: &[MetricRecord]) -> Result<()>;
}

/// JSON document on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    /// Default side-file name
    pub const DEFAULT_PATH: &'static str = "metricas.json";

    /// Store backed by `path`, pretty-printed
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Toggle pretty-printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store_error(&self, reason: impl ToString) -> ApiError {
        ApiError::Store {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl ResultStore for JsonFileStore {
    fn load(&self) -> Result<Vec<MetricRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No stored metrics at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.store_error(e)),
        };

        let records: Vec<MetricRecord> =
            serde_json::from_str(&content).map_err(|e| self.store_error(e))?;
        log::debug!(
            "Loaded {} stored record(s) from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn replace(&self, records: &[MetricRecord]) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };

        // Readers only ever see the old document or the complete new one
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| self.store_error(e))?;
                parent
            }
            None => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.store_error(e))?;
        file.write_all(json.as_bytes()).map_err(|e| self.store_error(e))?;
        file.flush().map_err(|e| self.store_error(e))?;
        file.persist(&self.path).map_err(|e| self.store_error(e.error))?;

        log::debug!(
            "Stored {} record(s) in {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-process store, mostly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<MetricRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryStore {
    fn load(&self) -> Result<Vec<MetricRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|e| ApiError::Store {
                path: "<memory>".to_string(),
                reason: e.to_string(),
            })?;
        Ok(records.clone())
    }

    fn replace(&self, records: &[MetricRecord]) -> Result<()> {
        let mut stored = self.records.lock().map_err(|e| ApiError::Store {
            path: "<memory>".to_string(),
            reason: e.to_string(),
        })?;
        *stored = records.to_vec();
        Ok(())
    }
}
