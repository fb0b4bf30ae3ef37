use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::sync::Arc;

use crate::errors::{ScanError, ScanResult};

static REGEX_CACHE: Lazy<DashMap<(String, RegexOptions), Arc<Regex>>> = Lazy::new(DashMap::new);

/// Engine flags applied when compiling a regex pattern.
///
/// The default is no flags: case-sensitive, single-line matching, mirroring
/// the behavior of the operations that take no options argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RegexOptions {
    /// Match letters without regard to case
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries instead of buffer boundaries
    pub multi_line: bool,
    /// `.` also matches `\n`
    pub dot_matches_new_line: bool,
    /// Ignore whitespace and allow `#` comments in the pattern
    pub ignore_whitespace: bool,
}

/// Strategy for testing and rewriting file content.
///
/// Constructed once per operation and shared read-only across all parallel
/// per-file tasks; neither variant carries mutable state.
#[derive(Debug, Clone)]
pub enum PatternMatcher {
    /// Exact substring containment, no metacharacter interpretation
    Literal(String),
    /// Compiled regular expression
    Regex(Arc<Regex>),
}

impl PatternMatcher {
    /// Creates a literal substring matcher
    pub fn literal(find_text: impl Into<String>) -> Self {
        Self::Literal(find_text.into())
    }

    /// Compiles a regex matcher with the given options.
    ///
    /// This is the single point of pattern validation: a malformed pattern
    /// fails here, before any file I/O begins. Compiled patterns are cached
    /// process-wide, keyed by pattern text and options.
    pub fn regex(pattern: &str, options: RegexOptions) -> ScanResult<Self> {
        let key = (pattern.to_string(), options);
        if let Some(entry) = REGEX_CACHE.get(&key) {
            return Ok(Self::Regex(entry.clone()));
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_new_line)
            .ignore_whitespace(options.ignore_whitespace)
            .build()
            .map_err(|e| ScanError::invalid_pattern(e.to_string()))?;

        let regex = Arc::new(regex);
        REGEX_CACHE.insert(key, regex.clone());
        Ok(Self::Regex(regex))
    }

    /// Tests whether the content contains a match
    pub fn is_match(&self, content: &str) -> bool {
        match self {
            Self::Literal(find_text) => content.contains(find_text.as_str()),
            Self::Regex(regex) => regex.is_match(content),
        }
    }

    /// Replaces every match in the content with the replacement text.
    ///
    /// In regex mode the replacement is handed to the engine verbatim, so
    /// `$1`/`${name}` group references expand with the engine's native
    /// substitution semantics.
    pub fn replace_all(&self, content: &str, replacement: &str) -> String {
        match self {
            Self::Literal(find_text) => content.replace(find_text.as_str(), replacement),
            Self::Regex(regex) => regex.replace_all(content, replacement).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_matching() {
        let matcher = PatternMatcher::literal("test");
        assert!(matcher.is_match("this is a test string"));
        assert!(!matcher.is_match("nothing here"));
        // No metacharacter interpretation in literal mode
        let matcher = PatternMatcher::literal("a.b");
        assert!(matcher.is_match("a.b"));
        assert!(!matcher.is_match("axb"));
    }

    #[test]
    fn test_literal_replace_all_occurrences() {
        let matcher = PatternMatcher::literal("old");
        assert_eq!(
            matcher.replace_all("old and old again", "new"),
            "new and new again"
        );
    }

    #[test]
    fn test_regex_matching() {
        let matcher = PatternMatcher::regex(r"\btest\w+", RegexOptions::default()).unwrap();
        assert!(matcher.is_match("testing"));
        assert!(!matcher.is_match("test"));
    }

    #[test]
    fn test_regex_replace_with_group_references() {
        let matcher = PatternMatcher::regex(r"(\w+)=(\w+)", RegexOptions::default()).unwrap();
        assert_eq!(
            matcher.replace_all("key=value other=thing", "$2=$1"),
            "value=key thing=other"
        );
    }

    #[test]
    fn test_case_insensitive_option() {
        let options = RegexOptions {
            case_insensitive: true,
            ..RegexOptions::default()
        };
        let matcher = PatternMatcher::regex("version", options).unwrap();
        assert!(matcher.is_match("VERSION = 1"));

        let default_matcher = PatternMatcher::regex("version", RegexOptions::default()).unwrap();
        assert!(!default_matcher.is_match("VERSION = 1"));
    }

    #[test]
    fn test_multi_line_option() {
        let options = RegexOptions {
            multi_line: true,
            ..RegexOptions::default()
        };
        let matcher = PatternMatcher::regex("^second$", options).unwrap();
        assert!(matcher.is_match("first\nsecond\nthird"));

        let default_matcher = PatternMatcher::regex("^second$", RegexOptions::default()).unwrap();
        assert!(!default_matcher.is_match("first\nsecond\nthird"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternMatcher::regex("(unclosed", RegexOptions::default()).unwrap_err();
        assert!(matches!(err, ScanError::InvalidPattern(_)));
    }

    #[test]
    fn test_pattern_caching() {
        // Use a unique pattern for this test to avoid interference from other tests
        let unique_pattern = format!(
            "cache_pattern_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );

        let first = PatternMatcher::regex(&unique_pattern, RegexOptions::default()).unwrap();
        let second = PatternMatcher::regex(&unique_pattern, RegexOptions::default()).unwrap();

        match (&first, &second) {
            (PatternMatcher::Regex(a), PatternMatcher::Regex(b)) => {
                assert!(Arc::ptr_eq(a, b), "Second compile should hit the cache");
            }
            _ => unreachable!("regex() always builds the regex variant"),
        }

        // Different options compile a distinct entry
        let options = RegexOptions {
            case_insensitive: true,
            ..RegexOptions::default()
        };
        let third = PatternMatcher::regex(&unique_pattern, options).unwrap();
        match (&first, &third) {
            (PatternMatcher::Regex(a), PatternMatcher::Regex(b)) => {
                assert!(!Arc::ptr_eq(a, b), "Options are part of the cache key");
            }
            _ => unreachable!("regex() always builds the regex variant"),
        }
    }
}
