//! Input resolution.
//!
//! Classifies the user-supplied input path and produces the ordered list of
//! source files a run will process:
//!
//! - A **file** is processed on its own. It must carry a recognized source
//!   extension (`.txt` or `.md`).
//! - A **directory** contributes its immediate entries whose names end in
//!   `.txt` or `.md` (case-sensitive, non-recursive), in sorted order. A
//!   directory with no matching entries is valid and yields an empty list —
//!   the run still produces an index page with zero links.
//! - Anything else is rejected as invalid input.

use crate::transform::SourceKind;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a file or directory: {0}")]
    InvalidInput(PathBuf),
    #[error("unsupported source type (expected .txt or .md): {0}")]
    Unsupported(PathBuf),
}

/// Resolve an input path into the ordered list of source files to process.
pub fn resolve_inputs(path: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if path.is_file() {
        if SourceKind::from_path(path).is_none() {
            return Err(ScanError::Unsupported(path.to_path_buf()));
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_dir() {
        let mut sources: Vec<PathBuf> = fs::read_dir(path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && is_source_name(p))
            .collect();
        sources.sort();
        return Ok(sources);
    }

    Err(ScanError::InvalidInput(path.to_path_buf()))
}

/// Case-sensitive extension filter for directory entries.
fn is_source_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".txt") || n.ends_with(".md"))
}
