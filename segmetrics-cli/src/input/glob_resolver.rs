//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve directories, files and glob patterns to a sorted file list
///
/// A directory contributes its regular files (not recursive). The result is
/// sorted and deduplicated so positional pairing sees a stable order.
pub fn resolve_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            files.extend(list_directory(path)?);
            continue;
        }

        let paths = glob(input).map_err(|e| CliError::InvalidPattern(format!("{input}: {e}")))?;
        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {input}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching: {}", inputs.join(", "));
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    #[test]
    fn test_directory_input() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["b.png", "a.png"]);
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let files = resolve_inputs(&[temp_dir.path().display().to_string()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.png"));
    }

    #[test]
    fn test_glob_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["10.png", "2.png", "notes.txt"]);
        let pattern = format!("{}/*.png", temp_dir.path().display());
        let single = temp_dir.path().join("2.png").display().to_string();

        let files = resolve_inputs(&[pattern, single]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        // byte order, not numeric order
        assert_eq!(names, ["10.png", "2.png"]);
    }

    #[test]
    fn test_nothing_matches() {
        let err = resolve_inputs(&["/nonexistent/segmetrics/*.png".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_inputs(&["[invalid".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern:"));
    }
}
