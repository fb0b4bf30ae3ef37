/// This module implements the concurrent glob-scan-and-mutate core, demonstrating Rust's
/// parallel processing capabilities compared to .NET's Task Parallel Library (TPL).
///
/// # .NET vs Rust Parallel Processing
///
/// In .NET, a parallel scan over a file set typically fans out with TPL and
/// aggregates into a concurrent collection:
/// ```csharp
/// var results = new ConcurrentBag<FilePath>();
/// Parallel.ForEach(files, f => {
///     var contents = File.ReadAllText(f);
///     if (contents.Contains(findText))
///         results.Add(f);
/// });
/// return results.ToArray();
/// ```
///
/// In Rust, Rayon's parallel iterators provide the same fan-out with the join
/// barrier and the aggregation folded into a single `collect`:
/// ```rust,ignore
/// let hits: ScanResult<Vec<Option<PathBuf>>> = files
///     .par_iter()
///     .map(|path| processor.process_file(path))
///     .collect();
/// ```
///
/// The `collect` over `Result` also encodes the failure policy: the first
/// per-file error observed short-circuits the wait and propagates, while
/// files already rewritten by sibling tasks stay rewritten.
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{debug, info};

use super::matcher::PatternMatcher;
use super::processor::{FileProcessor, ScanMode};
use crate::errors::{ScanError, ScanResult};
use crate::globber::Globber;

/// Performs a concurrent scan across all files matched by a glob pattern.
///
/// Expands the pattern through the globber, fans out one parallel task per
/// file (read, test, and in replace mode rewrite), and returns the set of
/// files that matched. The returned order is unspecified. A pattern matching
/// zero files yields an empty set without error.
///
/// The fan-out runs on a dedicated pool bounded by `thread_count`; the bound
/// does not change observable results.
pub fn scan<G: Globber>(
    globber: &G,
    glob_pattern: &str,
    matcher: PatternMatcher,
    mode: ScanMode,
    thread_count: NonZeroUsize,
) -> ScanResult<Vec<PathBuf>> {
    info!("Starting scan with glob pattern: {}", glob_pattern);

    let files = globber.expand(glob_pattern)?;
    if files.is_empty() {
        debug!("Glob pattern matched no files");
        return Ok(Vec::new());
    }
    debug!("Scanning {} files", files.len());

    let processor = FileProcessor::new(matcher, mode);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count.get())
        .build()
        .map_err(|e| ScanError::config_error(e.to_string()))?;

    let hits: Vec<Option<PathBuf>> = pool.install(|| {
        files
            .par_iter()
            .map(|path| processor.process_file(path))
            .collect::<ScanResult<_>>()
    })?;

    let matched: Vec<PathBuf> = hits.into_iter().flatten().collect();

    info!(
        "Scan complete: {} of {} files matched",
        matched.len(),
        files.len()
    );

    Ok(matched)
}
