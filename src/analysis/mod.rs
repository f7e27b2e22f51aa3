// Copyright (c) 2025 Bucketstat Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket distribution analysis.
//!
//! One pass hashes every word, then the bucket sequence feeds both the
//! frequency aggregation and the run finder.
//!
//! # Example
//!
//! ```
//! use bucketstat_lib::analysis::{analyze, RunPolicy};
//! use bucketstat_lib::hasher::HashStrategy;
//! use bucketstat_lib::wordlist::WordList;
//!
//! let words = WordList::from_words(["hello", "world", "rust"]);
//! let hasher = HashStrategy::Chars.build(64);
//! let report = analyze(&words, hasher.as_ref(), RunPolicy::ScoreTrailing).unwrap();
//!
//! assert_eq!(report.frequencies.total(), 3);
//! assert_eq!(report.summary.buckets, 3);
//! ```

mod frequency;
mod report;
mod runs;

pub use crate::error::analysis::{AnalysisError, AnalysisResult};
pub use frequency::{FrequencyMap, Summary};
pub use report::{OutputFormat, Report};
pub use runs::{display_run, longest_run, Run, RunPolicy, RunSpan, Runs};

use crate::error::{BucketstatError, BucketstatResult};
use crate::hasher::BucketHasher;
use crate::wordlist::WordList;
use tracing::{debug, info, instrument};

/// Hashes every word in order.
pub fn hash_words(words: &WordList, hasher: &dyn BucketHasher) -> BucketstatResult<Vec<usize>> {
    let buckets = words
        .iter()
        .map(|word| hasher.bucket(word))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(buckets)
}

/// Runs the full analysis of `words` under `hasher`.
///
/// Errors carry the span trace of this call when an `ErrorLayer` is installed.
#[instrument(level = "info", skip_all, fields(strategy = hasher.name(), words = words.len()))]
pub fn analyze(
    words: &WordList,
    hasher: &dyn BucketHasher,
    policy: RunPolicy,
) -> BucketstatResult<Report> {
    let buckets = hash_words(words, hasher).map_err(BucketstatError::in_current_span)?;
    debug!(hashed = buckets.len(), "Words hashed");

    let frequencies: FrequencyMap = buckets.iter().copied().collect();
    let summary = Summary::from_frequencies(&frequencies, hasher.bucket_count())
        .map_err(|e| BucketstatError::from(e).in_current_span())?;
    let longest_run = longest_run(&buckets, policy);

    info!(
        buckets = summary.buckets,
        min = summary.min,
        max = summary.max,
        chi_squared = summary.chi_squared,
        "Analysis complete"
    );

    Ok(Report {
        strategy: hasher.name().to_string(),
        words: words.len(),
        bucket_count: hasher.bucket_count(),
        summary,
        longest_run,
        frequencies,
    })
}
