//! Decoded raster images

use crate::error::{CoreError, Result};
use image::DynamicImage;
use std::path::Path;

/// A fully decoded image, owned by whoever loaded it
///
/// Any format the `image` crate can decode is accepted; channel layout and
/// bit depth are preserved until binarization.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: DynamicImage,
}

impl RasterImage {
    /// Wrap an already decoded image
    pub fn new(pixels: DynamicImage) -> Self {
        Self { pixels }
    }

    /// Decode the image stored at `path`
    ///
    /// Missing files, unreadable files and unsupported formats all surface
    /// as [`CoreError::Decode`] carrying the path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let pixels = image::open(path).map_err(|e| CoreError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { pixels })
    }

    /// Decode an in-memory encoded image; `label` is used in error messages
    pub fn from_bytes(bytes: &[u8], label: &str) -> Result<Self> {
        let pixels = image::load_from_memory(bytes).map_err(|e| CoreError::Decode {
            path: label.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Number of channels per pixel (1 for gray, 3 for RGB, 4 for RGBA, ...)
    pub fn channels(&self) -> u8 {
        self.pixels.color().channel_count()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.pixels
    }
}

impl From<DynamicImage> for RasterImage {
    fn from(pixels: DynamicImage) -> Self {
        Self::new(pixels)
    }
}
