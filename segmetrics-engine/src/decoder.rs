//! Image-decode collaborators
//!
//! The engine never touches the filesystem directly; it asks an
//! [`ImageDecoder`] to turn a path into pixels.

use crate::error::PairResult;
use segmetrics_core::{CoreError, RasterImage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Turns a path into a decoded raster
pub trait ImageDecoder: Send + Sync {
    /// Decode the image identified by `path`
    fn decode(&self, path: &Path) -> PairResult<RasterImage>;
}

/// Decoder backed by the local filesystem and the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageDecoder;

impl ImageDecoder for FsImageDecoder {
    fn decode(&self, path: &Path) -> PairResult<RasterImage> {
        RasterImage::open(path)
    }
}

/// Decoder serving pre-decoded images keyed by path
///
/// Unknown paths fail the same way a missing file would.
#[derive(Debug, Clone, Default)]
pub struct MemoryDecoder {
    images: HashMap<PathBuf, RasterImage>,
}

impl MemoryDecoder {
    /// Create an empty decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under `path`
    pub fn insert(&mut self, path: impl Into<PathBuf>, image: RasterImage) {
        self.images.insert(path.into(), image);
    }

    /// Builder-style [`MemoryDecoder::insert`]
    pub fn with(mut self, path: impl Into<PathBuf>, image: RasterImage) -> Self {
        self.insert(path, image);
        self
    }
}

impl ImageDecoder for MemoryDecoder {
    fn decode(&self, path: &Path) -> PairResult<RasterImage> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| CoreError::Decode {
                path: path.display().to_string(),
                reason: "no such image".to_string(),
            })
    }
}
