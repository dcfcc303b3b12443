use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a file to string, returning a descriptive error on failure.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Read one key id candidate per line. Surrounding whitespace is trimmed and
/// blank lines are skipped.
pub fn read_candidates(path: &Path) -> Result<Vec<String>> {
    let contents = read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
