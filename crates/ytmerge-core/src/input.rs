//! Loading of the credential and playlist list files

use std::fs;
use std::path::Path;

use crate::error::{Result, YtMergeError};

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| YtMergeError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the API key file
///
/// The contents are returned untouched, trailing newline included.
pub fn load_api_key(path: impl AsRef<Path>) -> Result<String> {
    read(path.as_ref())
}

/// Reads the newline-delimited playlist URL file
///
/// Lines are trimmed and blank lines are skipped; order is preserved.
pub fn load_playlist_refs(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = read(path.as_ref())?;
    Ok(parse_playlist_refs(&contents))
}

/// Splits playlist file contents into references
pub fn parse_playlist_refs(contents: &str) -> Vec<String> {
    contents
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
