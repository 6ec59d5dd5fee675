//! Positional pairing of mask and segmentation lists
//!
//! Pair `i` is `(masks[i], segments[i])`. Both lists are expected to be
//! sorted already; nothing here re-sorts them. File names are not matched,
//! so the lists must line up by sort order.

use std::path::{Path, PathBuf};

/// One mask/segmentation comparison to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairJob {
    /// Position in the pairing
    pub index: usize,
    /// Ground-truth mask
    pub mask_path: PathBuf,
    /// Predicted segmentation
    pub segment_path: PathBuf,
}

impl PairJob {
    /// Identifier reported for the mask side
    pub fn mask_name(&self) -> String {
        display_name(&self.mask_path)
    }

    /// Identifier reported for the segmentation side
    pub fn segment_name(&self) -> String {
        display_name(&self.segment_path)
    }

    /// Whether the two file stems differ
    pub fn stems_differ(&self) -> bool {
        self.mask_path.file_stem() != self.segment_path.file_stem()
    }
}

/// Jobs produced from two lists plus what was left over
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    /// Jobs in positional order
    pub jobs: Vec<PairJob>,
    /// Trailing masks without a segmentation
    pub unmatched_masks: usize,
    /// Trailing segmentations without a mask
    pub unmatched_segments: usize,
}

/// Pair two path lists by position
pub fn pair_by_position<M, S>(masks: &[M], segments: &[S]) -> Pairing
where
    M: AsRef<Path>,
    S: AsRef<Path>,
{
    let jobs: Vec<PairJob> = masks
        .iter()
        .zip(segments)
        .enumerate()
        .map(|(index, (mask, segment))| PairJob {
            index,
            mask_path: mask.as_ref().to_path_buf(),
            segment_path: segment.as_ref().to_path_buf(),
        })
        .collect();

    Pairing {
        unmatched_masks: masks.len() - jobs.len(),
        unmatched_segments: segments.len() - jobs.len(),
        jobs,
    }
}

/// Last path component, or the whole path when there is none
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_equal_lengths() {
        let pairing = pair_by_position(&["m/a.png", "m/b.png"], &["s/a.png", "s/b.png"]);

        assert_eq!(pairing.jobs.len(), 2);
        assert_eq!(pairing.jobs[1].index, 1);
        assert_eq!(pairing.jobs[1].mask_path, PathBuf::from("m/b.png"));
        assert_eq!(pairing.jobs[1].segment_path, PathBuf::from("s/b.png"));
        assert_eq!(pairing.unmatched_masks, 0);
        assert_eq!(pairing.unmatched_segments, 0);
    }

    #[test]
    fn test_trailing_entries_are_dropped() {
        let pairing = pair_by_position(&["a", "b", "c"], &["x", "y"]);
        assert_eq!(pairing.jobs.len(), 2);
        assert_eq!(pairing.unmatched_masks, 1);
        assert_eq!(pairing.unmatched_segments, 0);

        let pairing = pair_by_position(&["a"], &["x", "y", "z"]);
        assert_eq!(pairing.jobs.len(), 1);
        assert_eq!(pairing.unmatched_segments, 2);
    }

    #[test]
    fn test_no_resorting() {
        let pairing = pair_by_position(&["b.png", "a.png"], &["1.png", "2.png"]);
        assert_eq!(pairing.jobs[0].mask_path, PathBuf::from("b.png"));
        assert_eq!(pairing.jobs[0].segment_path, PathBuf::from("1.png"));
    }

    #[test]
    fn test_empty_lists() {
        let empty: [&str; 0] = [];
        let pairing = pair_by_position(&empty, &["x"]);
        assert!(pairing.jobs.is_empty());
        assert_eq!(pairing.unmatched_segments, 1);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("imagens/mascara/001.png")), "001.png");
        assert_eq!(display_name(Path::new("plain.png")), "plain.png");
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[test]
    fn test_stems_differ() {
        let pairing = pair_by_position(&["m/001.png", "m/002.png"], &["s/001.jpg", "s/003.png"]);
        assert!(!pairing.jobs[0].stems_differ());
        assert!(pairing.jobs[1].stems_differ());
    }
}
