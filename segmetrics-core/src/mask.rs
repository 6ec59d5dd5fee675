//! Boolean foreground masks and the binarizer

use crate::error::{CoreError, Result};
use crate::raster::RasterImage;
use image::GrayImage;
use std::path::Path;

/// Luma values strictly above this are foreground
pub const FOREGROUND_THRESHOLD: u8 = 0;

/// Row-major boolean grid, `true` = foreground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl BinaryMask {
    /// Build a mask from a row-major buffer
    pub fn from_vec(width: u32, height: u32, data: Vec<bool>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(CoreError::InvalidDimensions {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a mask from rows of 0/1 style values; any non-zero entry is foreground
    ///
    /// All rows must have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        if let Some(ragged) = rows.iter().find(|r| r.as_ref().len() != width as usize) {
            return Err(CoreError::InvalidDimensions {
                width,
                height,
                expected: width as usize,
                actual: ragged.as_ref().len(),
            });
        }
        let data: Vec<bool> = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().map(|&v| v > FOREGROUND_THRESHOLD))
            .collect();
        Self::from_vec(width, height, data)
    }

    /// Threshold an 8-bit luminance image
    pub fn from_luma(gray: &GrayImage) -> Self {
        let (width, height) = gray.dimensions();
        let data = gray
            .as_raw()
            .iter()
            .map(|&v| v > FOREGROUND_THRESHOLD)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total pixel count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[bool] {
        &self.data
    }

    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Number of foreground pixels
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}

/// Reduce an image to a foreground mask
///
/// The image is converted to 8-bit luminance with the `image` crate's
/// standard weighting, then every pixel with luma > 0 is foreground. The
/// same conversion is applied to ground truth and predictions alike.
pub fn binarize(image: &RasterImage) -> BinaryMask {
    BinaryMask::from_luma(&image.as_dynamic().to_luma8())
}

/// Decode `path` and binarize it
pub fn binarize_path<P: AsRef<Path>>(path: P) -> Result<BinaryMask> {
    let raster = RasterImage::open(path)?;
    Ok(binarize(&raster))
}
