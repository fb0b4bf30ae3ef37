/// This module defines custom error types for filescout, demonstrating Rust's error handling
/// compared to .NET's exception system.
///
/// # Rust vs .NET Error Handling
///
/// .NET surfaces file helper failures as exceptions:
/// ```csharp
/// try {
///     ReplaceTextInFiles("**/*.config", "1.0.0", "1.0.1");
/// } catch (FileNotFoundException ex) {
///     // Handle missing file
/// } catch (UnauthorizedAccessException ex) {
///     // Handle permission error
/// }
/// ```
///
/// Rust uses Result types with custom errors:
/// ```rust,ignore
/// match workspace.replace_text_in_files("**/*.config", "1.0.0", "1.0.1") {
///     Ok(files) => // Process the rewritten files,
///     Err(ScanError::FileNotFound(path)) => // Handle missing file,
///     Err(ScanError::PermissionDenied(path)) => // Handle permission error,
///     Err(e) => // Handle other errors
/// }
/// ```
///
/// Every variant here is fatal to the operation that produced it: nothing is
/// caught, logged-and-skipped, or retried inside the library.
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for file scan and helper operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during scan and file helper operations
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Glob expansion failed: {0}")]
    GlobFailure(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Canonicalize the path and strip UNC prefixes so that
/// comparisons on Windows are consistent.
pub fn unify_path(original: &Path) -> PathBuf {
    let canonical = original
        .canonicalize()
        .unwrap_or_else(|_| original.to_path_buf());
    strip_unc_prefix(&canonical)
}

/// Strips the Windows UNC prefix (\\?\) from a path if present
fn strip_unc_prefix(p: &Path) -> PathBuf {
    let s = p.display().to_string();
    if let Some(stripped) = s.strip_prefix(r"\\?\") {
        PathBuf::from(stripped)
    } else {
        p.to_path_buf()
    }
}

impl ScanError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern(pattern.into())
    }

    pub fn glob_failure(msg: impl Into<String>) -> Self {
        Self::GlobFailure(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
