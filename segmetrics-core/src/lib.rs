//! Mask binarization and overlap metrics
//!
//! This crate holds the computational core of segmetrics: reducing any
//! decoded image to a boolean foreground mask, and scoring a predicted mask
//! against a ground-truth mask.
//!
//! # Example
//!
//! ```rust
//! use segmetrics_core::{compare, BinaryMask};
//!
//! let truth = BinaryMask::from_rows(&[[1, 0], [0, 0]]).unwrap();
//! let predicted = BinaryMask::from_rows(&[[1, 1], [0, 0]]).unwrap();
//!
//! let record = compare(&truth, &predicted, "truth.png", "pred.png").unwrap();
//! assert_eq!(record.similarity, 0.75);
//! assert_eq!(record.iou, 50.0);
//! assert_eq!(record.dice, 66.67);
//! assert_eq!(record.precision, 0.5);
//! ```

pub mod error;
pub mod mask;
pub mod metrics;
pub mod raster;

pub use error::{CoreError, Result};
pub use mask::{binarize, binarize_path, BinaryMask, FOREGROUND_THRESHOLD};
pub use metrics::{compare, MetricRecord, OverlapCounts};
pub use raster::RasterImage;
