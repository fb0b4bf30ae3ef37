//! Glob expansion of pattern strings into concrete file paths.
//!
//! The scan engine is generic over the [`Globber`] trait so a host can supply
//! its own file discovery; [`GlobExpander`] is the default implementation,
//! rooted at a workspace directory.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{ScanError, ScanResult};

/// Expands a glob pattern string into a concrete list of file paths.
///
/// No ordering guarantee is made on the returned list, and an expansion that
/// matches zero files is not an error. Only expansion itself can fail, e.g.
/// on a malformed pattern or an unreadable directory encountered mid-walk.
pub trait Globber {
    fn expand(&self, pattern: &str) -> ScanResult<Vec<PathBuf>>;
}

/// Default globber backed by the `glob` crate, rooted at a base directory.
///
/// Relative patterns are expanded against the root; absolute patterns are
/// used as-is. Directories matched by the pattern are skipped, only files
/// are returned.
#[derive(Debug, Clone)]
pub struct GlobExpander {
    root: PathBuf,
}

impl GlobExpander {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Globber for GlobExpander {
    fn expand(&self, pattern: &str) -> ScanResult<Vec<PathBuf>> {
        let full_pattern = if Path::new(pattern).is_absolute() {
            pattern.to_string()
        } else {
            self.root.join(pattern).to_string_lossy().into_owned()
        };

        let entries =
            glob::glob(&full_pattern).map_err(|e| ScanError::glob_failure(e.to_string()))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ScanError::glob_failure(e.to_string()))?;
            if path.is_file() {
                files.push(path);
            }
        }

        debug!("Expanded '{}' to {} files", pattern, files.len());
        Ok(files)
    }
}
