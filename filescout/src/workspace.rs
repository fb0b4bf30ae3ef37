//! The public operation surface: a workspace rooted at a directory, exposing
//! the whole-file helpers and the four glob-scan operations.

use std::path::{Path, PathBuf};

use crate::config::WorkspaceConfig;
use crate::errors::ScanResult;
use crate::file_ops;
use crate::globber::GlobExpander;
use crate::scan::{self, PatternMatcher, RegexOptions, ScanMode};

/// A directory root against which file paths and glob patterns resolve.
///
/// All operations take logical paths: relative paths resolve against the
/// workspace root, absolute paths are used as-is.
#[derive(Debug, Clone)]
pub struct Workspace {
    config: WorkspaceConfig,
}

impl Workspace {
    /// Creates a workspace rooted at the given directory with default settings
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(WorkspaceConfig {
            root_path: root.into(),
            ..WorkspaceConfig::default()
        })
    }

    /// Creates a workspace from a full configuration
    pub fn with_config(config: WorkspaceConfig) -> Self {
        Self { config }
    }

    pub fn root(&self) -> &Path {
        &self.config.root_path
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Resolves a logical file path to a concrete path under the root
    pub fn resolve(&self, file: impl AsRef<Path>) -> PathBuf {
        let file = file.as_ref();
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.config.root_path.join(file)
        }
    }

    fn globber(&self) -> GlobExpander {
        GlobExpander::new(&self.config.root_path)
    }

    /// Reads all text from a file
    pub fn read_text(&self, file: impl AsRef<Path>) -> ScanResult<String> {
        file_ops::read_text(&self.resolve(file))
    }

    /// Reads all lines from a file
    pub fn read_lines(&self, file: impl AsRef<Path>) -> ScanResult<Vec<String>> {
        file_ops::read_lines(&self.resolve(file))
    }

    /// Writes all text to a file, replacing any existing content
    pub fn write_text(&self, file: impl AsRef<Path>, text: &str) -> ScanResult<()> {
        file_ops::write_text(&self.resolve(file), text)
    }

    /// Writes all lines to a file, replacing any existing content
    pub fn write_lines<S: AsRef<str>>(&self, file: impl AsRef<Path>, lines: &[S]) -> ScanResult<()> {
        file_ops::write_lines(&self.resolve(file), lines)
    }

    /// Appends text to a file, creating it if it does not exist
    pub fn append_text(&self, file: impl AsRef<Path>, text: &str) -> ScanResult<()> {
        file_ops::append_text(&self.resolve(file), text)
    }

    /// Appends lines to a file, creating it if it does not exist
    pub fn append_lines<S: AsRef<str>>(
        &self,
        file: impl AsRef<Path>,
        lines: &[S],
    ) -> ScanResult<()> {
        file_ops::append_lines(&self.resolve(file), lines)
    }

    /// Finds files matched by the glob pattern whose content contains the text
    pub fn find_text_in_files(
        &self,
        glob_pattern: &str,
        find_text: &str,
    ) -> ScanResult<Vec<PathBuf>> {
        scan::scan(
            &self.globber(),
            glob_pattern,
            PatternMatcher::literal(find_text),
            ScanMode::Find,
            self.config.thread_count,
        )
    }

    /// Finds files matched by the glob pattern whose content matches the regex
    pub fn find_regex_in_files(
        &self,
        glob_pattern: &str,
        pattern: &str,
        options: RegexOptions,
    ) -> ScanResult<Vec<PathBuf>> {
        let matcher = PatternMatcher::regex(pattern, options)?;
        scan::scan(
            &self.globber(),
            glob_pattern,
            matcher,
            ScanMode::Find,
            self.config.thread_count,
        )
    }

    /// Replaces the text in files matched by the glob pattern, returning the
    /// files that were rewritten
    pub fn replace_text_in_files(
        &self,
        glob_pattern: &str,
        find_text: &str,
        replace_text: &str,
    ) -> ScanResult<Vec<PathBuf>> {
        scan::scan(
            &self.globber(),
            glob_pattern,
            PatternMatcher::literal(find_text),
            ScanMode::Replace(replace_text.to_string()),
            self.config.thread_count,
        )
    }

    /// Replaces every regex match in files matched by the glob pattern,
    /// returning the files that were rewritten.
    ///
    /// Group references in the replacement text (`$1`, `${name}`) expand with
    /// the regex engine's native substitution semantics.
    pub fn replace_regex_in_files(
        &self,
        glob_pattern: &str,
        pattern: &str,
        replace_text: &str,
        options: RegexOptions,
    ) -> ScanResult<Vec<PathBuf>> {
        let matcher = PatternMatcher::regex(pattern, options)?;
        scan::scan(
            &self.globber(),
            glob_pattern,
            matcher,
            ScanMode::Replace(replace_text.to_string()),
            self.config.thread_count,
        )
    }
}
