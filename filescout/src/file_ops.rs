//! Whole-file read, write, and append primitives.
//!
//! Every function here operates on an already-resolved path and performs a
//! single full-file operation: reads load the entire file into memory, writes
//! overwrite the file in place, appends extend it. There is no retry logic;
//! the underlying I/O failure surfaces as-is through the error taxonomy.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::trace;

use crate::errors::{ScanError, ScanResult};

pub(crate) fn map_io_error(path: &Path, e: std::io::Error) -> ScanError {
    match e.kind() {
        std::io::ErrorKind::NotFound => ScanError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => ScanError::permission_denied(path),
        _ => ScanError::IoError(e),
    }
}

/// Reads the entire file as a string
pub fn read_text(path: &Path) -> ScanResult<String> {
    trace!("Reading file: {}", path.display());
    fs::read_to_string(path).map_err(|e| map_io_error(path, e))
}

/// Reads the entire file and splits it into lines
pub fn read_lines(path: &Path) -> ScanResult<Vec<String>> {
    let contents = read_text(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Overwrites the file with the given text
pub fn write_text(path: &Path, text: &str) -> ScanResult<()> {
    trace!("Writing {} bytes to file: {}", text.len(), path.display());
    fs::write(path, text).map_err(|e| map_io_error(path, e))
}

/// Overwrites the file with the given lines, each terminated by a newline
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> ScanResult<()> {
    let mut text = String::new();
    for line in lines {
        text.push_str(line.as_ref());
        text.push('\n');
    }
    write_text(path, &text)
}

/// Appends text to the file, creating it if it does not exist
pub fn append_text(path: &Path, text: &str) -> ScanResult<()> {
    trace!("Appending {} bytes to file: {}", text.len(), path.display());
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| map_io_error(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| map_io_error(path, e))
}

/// Appends lines to the file, each terminated by a newline
pub fn append_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> ScanResult<()> {
    let mut text = String::new();
    for line in lines {
        text.push_str(line.as_ref());
        text.push('\n');
    }
    append_text(path, &text)
}
