//! Directory collaborator
//!
//! Lists the three image collections (originals, predicted segmentations,
//! ground-truth masks) living under one root. Listings are sorted so that
//! positional pairing is deterministic.

use glob::glob;
use segmetrics_engine::BatchError;
use std::path::{Path, PathBuf};

/// The three image collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// Source images
    Original,
    /// Predicted segmentations
    Segmented,
    /// Ground-truth masks
    Mask,
}

impl ImageKind {
    /// Get the kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Original => "original",
            ImageKind::Segmented => "segmented",
            ImageKind::Mask => "mask",
        }
    }
}

/// Supplies ordered path lists for each image collection
pub trait DirectorySource: Send + Sync {
    /// Sorted regular files of one collection
    fn list(&self, kind: ImageKind) -> Result<Vec<PathBuf>, BatchError>;
}

/// Image tree rooted at one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDirectory {
    root: PathBuf,
    original: String,
    segmented: String,
    mask: String,
}

impl ImageDirectory {
    /// Default root directory
    pub const DEFAULT_ROOT: &'static str = "imagens";
    /// Default originals subdirectory
    pub const DEFAULT_ORIGINAL: &'static str = "original";
    /// Default segmentations subdirectory
    pub const DEFAULT_SEGMENTED: &'static str = "segmentado";
    /// Default masks subdirectory
    pub const DEFAULT_MASK: &'static str = "mascara";

    /// Standard layout under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            original: Self::DEFAULT_ORIGINAL.to_string(),
            segmented: Self::DEFAULT_SEGMENTED.to_string(),
            mask: Self::DEFAULT_MASK.to_string(),
        }
    }

    /// Override the subdirectory used for `kind`
    pub fn with_subdir(mut self, kind: ImageKind, name: impl Into<String>) -> Self {
        let name = name.into();
        match kind {
            ImageKind::Original => self.original = name,
            ImageKind::Segmented => self.segmented = name,
            ImageKind::Mask => self.mask = name,
        }
        self
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding `kind`
    pub fn dir(&self, kind: ImageKind) -> PathBuf {
        let sub = match kind {
            ImageKind::Original => &self.original,
            ImageKind::Segmented => &self.segmented,
            ImageKind::Mask => &self.mask,
        };
        self.root.join(sub)
    }
}

impl Default for ImageDirectory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROOT)
    }
}

impl DirectorySource for ImageDirectory {
    fn list(&self, kind: ImageKind) -> Result<Vec<PathBuf>, BatchError> {
        if !self.root.is_dir() {
            return Err(BatchError::SourceUnavailable {
                path: self.root.display().to_string(),
                reason: "root directory does not exist".to_string(),
            });
        }

        let dir = self.dir(kind);
        if !dir.is_dir() {
            log::debug!("No {} directory at {}", kind.as_str(), dir.display());
            return Ok(Vec::new());
        }

        let escaped = glob::Pattern::escape(&dir.to_string_lossy());
        let pattern = Path::new(&escaped).join("*");
        let pattern = pattern.to_string_lossy();
        let entries = glob(&pattern).map_err(|e| BatchError::SourceUnavailable {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| BatchError::SourceUnavailable {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        log::debug!("Listed {} {} file(s)", files.len(), kind.as_str());
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let dir = ImageDirectory::default();
        assert_eq!(dir.root(), Path::new("imagens"));
        assert_eq!(
            dir.dir(ImageKind::Segmented),
            PathBuf::from("imagens/segmentado")
        );
        assert_eq!(dir.dir(ImageKind::Mask), PathBuf::from("imagens/mascara"));
    }

    #[test]
    fn test_with_subdir() {
        let dir = ImageDirectory::new("data").with_subdir(ImageKind::Mask, "gt");
        assert_eq!(dir.dir(ImageKind::Mask), PathBuf::from("data/gt"));
    }

    #[test]
    fn test_list_sorted_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let seg = temp_dir.path().join("segmentado");
        fs::create_dir_all(seg.join("nested")).unwrap();
        fs::write(seg.join("b.png"), b"").unwrap();
        fs::write(seg.join("a.png"), b"").unwrap();
        fs::write(seg.join("c.png"), b"").unwrap();

        let dir = ImageDirectory::new(temp_dir.path());
        let files = dir.list(ImageKind::Segmented).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_missing_subdir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let dir = ImageDirectory::new(temp_dir.path());
        assert!(dir.list(ImageKind::Original).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = ImageDirectory::new("/nonexistent/segmetrics-root");
        let err = dir.list(ImageKind::Mask).unwrap_err();
        assert!(matches!(err, BatchError::SourceUnavailable { .. }));
    }
}
