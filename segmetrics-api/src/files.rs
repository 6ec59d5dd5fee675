//! Image file lookup

use crate::dto::IMAGE_URL_PREFIX;
use crate::error::{ApiError, Result};
use std::path::{Component, Path, PathBuf};

/// Resolve `requested` against `root`
///
/// Accepts either a path relative to `root` or the `/image-files/...` URL
/// form produced by [`crate::dto::image_url`]. An absolute path, which is
/// what a page built from an absolute image root contains, is accepted when
/// it lies under `root`. Anything that is not an existing regular file is
/// [`ApiError::MissingFile`]; paths that climb out of `root` are
/// [`ApiError::InvalidInput`].
pub fn locate_image(root: &Path, requested: &str) -> Result<PathBuf> {
    let stripped = requested.strip_prefix(IMAGE_URL_PREFIX).unwrap_or(requested);
    let missing = || ApiError::MissingFile {
        path: requested.to_string(),
    };

    let candidate = if Path::new(stripped).is_absolute() {
        let absolute = Path::new(stripped);
        let (Ok(root), Ok(absolute)) = (root.canonicalize(), absolute.canonicalize()) else {
            return Err(missing());
        };
        if !absolute.starts_with(&root) {
            return Err(escapes_root(requested));
        }
        absolute
    } else {
        let relative = Path::new(stripped.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(escapes_root(requested));
        }
        root.join(relative)
    };

    if candidate.is_file() {
        log::debug!("Resolved {} to {}", requested, candidate.display());
        Ok(candidate)
    } else {
        Err(missing())
    }
}

fn escapes_root(requested: &str) -> ApiError {
    ApiError::InvalidInput(format!("path escapes the image root: {requested}"))
}
