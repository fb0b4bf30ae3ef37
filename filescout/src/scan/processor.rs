use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::matcher::PatternMatcher;
use crate::errors::ScanResult;
use crate::file_ops;

/// Whether a scan only reports matching files or also rewrites them
#[derive(Debug, Clone)]
pub enum ScanMode {
    /// Read-only: matching files are reported, never written
    Find,
    /// Matching files are rewritten in place with every match replaced
    Replace(String),
}

/// The per-file unit of work: read, test, conditionally rewrite.
///
/// One processor is shared read-only by all parallel tasks of a scan; the
/// only side effect is the in-place rewrite of a matching file in replace
/// mode, performed through the whole-file write primitive.
#[derive(Debug)]
pub struct FileProcessor {
    matcher: PatternMatcher,
    mode: ScanMode,
}

impl FileProcessor {
    pub fn new(matcher: PatternMatcher, mode: ScanMode) -> Self {
        Self { matcher, mode }
    }

    /// Processes a single file, returning its path if the pattern matched.
    ///
    /// Files that do not match are left byte-for-byte untouched. Any I/O
    /// failure propagates to the caller unhandled.
    pub fn process_file(&self, path: &Path) -> ScanResult<Option<PathBuf>> {
        trace!("Scanning file: {}", path.display());
        let contents = file_ops::read_text(path)?;

        if !self.matcher.is_match(&contents) {
            return Ok(None);
        }

        if let ScanMode::Replace(replacement) = &self.mode {
            let rewritten = self.matcher.replace_all(&contents, replacement);
            file_ops::write_text(path, &rewritten)?;
            debug!("Rewrote file: {}", path.display());
        }

        Ok(Some(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScanError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_find_mode_reports_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");
        fs::write(&path, "Hello world").unwrap();

        let processor = FileProcessor::new(PatternMatcher::literal("world"), ScanMode::Find);
        let hit = processor.process_file(&path).unwrap();

        assert_eq!(hit, Some(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello world");
    }

    #[test]
    fn test_no_match_reports_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");
        fs::write(&path, "Hello world").unwrap();

        let processor = FileProcessor::new(PatternMatcher::literal("absent"), ScanMode::Find);
        assert_eq!(processor.process_file(&path).unwrap(), None);
    }

    #[test]
    fn test_replace_mode_rewrites_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");
        fs::write(&path, "one two one").unwrap();

        let processor = FileProcessor::new(
            PatternMatcher::literal("one"),
            ScanMode::Replace("three".to_string()),
        );
        let hit = processor.process_file(&path).unwrap();

        assert_eq!(hit, Some(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "three two three");
    }

    #[test]
    fn test_replace_mode_leaves_non_matching_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");
        fs::write(&path, "nothing to do").unwrap();

        let processor = FileProcessor::new(
            PatternMatcher::literal("absent"),
            ScanMode::Replace("ignored".to_string()),
        );
        assert_eq!(processor.process_file(&path).unwrap(), None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "nothing to do");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let processor = FileProcessor::new(PatternMatcher::literal("x"), ScanMode::Find);
        let err = processor.process_file(&path).unwrap_err();
        assert!(matches!(err, ScanError::FileNotFound(_)));
    }
}
