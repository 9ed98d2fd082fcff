//! Reading puzzle input files

use std::fs;
use std::path::Path;

use log::debug;

use crate::io::error::{PuzzleError, Result};

/// Read a whole UTF-8 file
///
/// # Errors
///
/// Returns `PuzzleError::FileSystem` if the file is missing or unreadable
pub fn read(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Read a file as lines, dropping empty ones
///
/// Any of `\r\n`, `\r` and `\n` ends a line.
///
/// # Errors
///
/// Returns `PuzzleError::FileSystem` if the file is missing or unreadable
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = read(path)?;
    Ok(split_lines(&content)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Split text on `\r\n`, `\r` or `\n`, keeping empty lines
///
/// A single trailing line terminator does not produce a final empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(|line| line.split('\r'))
}
