//! Overlap metrics between a ground-truth mask and a predicted mask

use crate::error::{CoreError, Result};
use crate::mask::BinaryMask;

/// Raw pixel counts behind every metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlapCounts {
    /// Foreground in both masks (I)
    pub intersection: usize,
    /// Foreground in either mask (U)
    pub union: usize,
    /// Foreground in the ground truth (A)
    pub truth_foreground: usize,
    /// Foreground in the prediction (B)
    pub predicted_foreground: usize,
    /// Pixels where both masks carry the same value
    pub agreement: usize,
    /// Total pixel count (N)
    pub total: usize,
}

impl OverlapCounts {
    /// Count overlap between `truth` and `predicted`
    ///
    /// Fails with [`CoreError::ShapeMismatch`] unless both masks have the
    /// same width and height.
    pub fn between(truth: &BinaryMask, predicted: &BinaryMask) -> Result<Self> {
        if truth.dimensions() != predicted.dimensions() {
            return Err(CoreError::ShapeMismatch {
                expected: truth.dimensions(),
                actual: predicted.dimensions(),
            });
        }

        let mut counts = Self {
            total: truth.len(),
            ..Self::default()
        };

        for (&a, &b) in truth.data().iter().zip(predicted.data()) {
            counts.intersection += usize::from(a && b);
            counts.union += usize::from(a || b);
            counts.truth_foreground += usize::from(a);
            counts.predicted_foreground += usize::from(b);
            counts.agreement += usize::from(a == b);
        }

        Ok(counts)
    }
}

/// Metrics for one mask/segmentation pairing
///
/// `iou` and `dice` are percentages with two decimals; `similarity` and
/// `precision` are fractions with four decimals. Zero denominators give 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricRecord {
    /// Identifier of the ground-truth mask
    #[cfg_attr(feature = "serde", serde(rename = "mask"))]
    pub mask_name: String,
    /// Identifier of the predicted segmentation
    #[cfg_attr(feature = "serde", serde(rename = "segmentada"))]
    pub segment_name: String,
    /// Pixel-wise agreement ratio in [0, 1]
    pub similarity: f64,
    /// Intersection over union, percent
    pub iou: f64,
    /// Dice coefficient, percent
    pub dice: f64,
    /// True positives over predicted positives in [0, 1]
    pub precision: f64,
}

impl MetricRecord {
    /// Derive the rounded metrics from raw counts
    pub fn from_counts(
        mask_name: impl Into<String>,
        segment_name: impl Into<String>,
        counts: &OverlapCounts,
    ) -> Self {
        let similarity = ratio(counts.agreement, counts.total);
        let iou = 100.0 * ratio(counts.intersection, counts.union);
        let dice = 100.0
            * ratio(
                2 * counts.intersection,
                counts.truth_foreground + counts.predicted_foreground,
            );
        let precision = ratio(counts.intersection, counts.predicted_foreground);

        Self {
            mask_name: mask_name.into(),
            segment_name: segment_name.into(),
            similarity: round_to(similarity, 4),
            iou: round_to(iou, 2),
            dice: round_to(dice, 2),
            precision: round_to(precision, 4),
        }
    }
}

/// Compare a ground-truth mask against a prediction
///
/// Order matters: `truth` is the reference, `predicted` the segmentation
/// under test. Only `precision` depends on it.
pub fn compare(
    truth: &BinaryMask,
    predicted: &BinaryMask,
    truth_id: &str,
    predicted_id: &str,
) -> Result<MetricRecord> {
    let counts = OverlapCounts::between(truth, predicted)?;
    Ok(MetricRecord::from_counts(truth_id, predicted_id, &counts))
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
