//! Shared test utilities.

use std::fs;
use std::path::{Path, PathBuf};

/// Write a source file into `dir` and return its path.
pub fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
