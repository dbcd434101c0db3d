//! Newline-delimited URL lists for the deployment validator.

use std::fs;
use std::path::Path;

use crate::error::{InputError, Result};

/// Reads one URL per line, trimming whitespace and skipping blank lines.
///
/// An existing file with no URLs is returned as an empty list; the caller
/// decides whether that is fatal.
pub fn read_urls(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| InputError::from_io(path, e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
