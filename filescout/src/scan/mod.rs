//! The concurrent glob-scan-and-mutate core: pattern matching, the per-file
//! unit of work, and the parallel engine that orchestrates them.

pub mod engine;
pub mod matcher;
pub mod processor;

pub use engine::scan;
pub use matcher::{PatternMatcher, RegexOptions};
pub use processor::{FileProcessor, ScanMode};
