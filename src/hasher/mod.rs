// Copyright (c) 2025 Bucketstat Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket hash functions.
//!
//! A bucket hash maps a word to one of a fixed number of buckets. The
//! functions under evaluation are deliberately cheap: they only look at the
//! first, middle and last character of a word plus its length, then scramble
//! the packed value with three XOR-shift rounds.
//!
//! # Example
//!
//! ```
//! use bucketstat_lib::hasher::{BucketHasher, HashStrategy};
//!
//! let hasher = HashStrategy::Chars.build(64);
//! assert_eq!(hasher.bucket("hello").unwrap(), 32);
//! ```

mod baseline;
mod xorshift;

pub use crate::error::hash::{HashError, HashResult};
pub use baseline::FnvBucketHasher;
pub use xorshift::{mix, ByteXorShift, CharXorShift};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Maps words to buckets in `[0, bucket_count)`.
#[cfg_attr(test, mockall::automock)]
pub trait BucketHasher {
    /// Short name of the strategy, used in reports and logs.
    fn name(&self) -> &'static str;

    /// Number of buckets values are reduced into.
    fn bucket_count(&self) -> usize;

    /// Computes the bucket of `word`.
    ///
    /// The same word always lands in the same bucket.
    fn bucket(&self, word: &str) -> HashResult<usize>;
}

/// Selectable bucket hash functions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HashStrategy {
    /// First/middle/last character and character length, XOR-shift mixed
    #[default]
    Chars,
    /// First/middle/last byte and truncated byte length, XOR-shift mixed
    Bytes,
    /// FNV-1a 64 baseline
    Fnv,
}

/// Reduces a full-width hash into `[0, bucket_count)`.
fn reduce(hash: u64, bucket_count: usize, strategy: &'static str) -> HashResult<usize> {
    hash.checked_rem(bucket_count as u64)
        .map(|bucket| bucket as usize)
        .ok_or(HashError::NoBuckets { strategy })
}

impl HashStrategy {
    /// Builds the hasher for this strategy over `bucket_count` buckets.
    ///
    /// A zero count is accepted here; every `bucket` call then fails with
    /// [`HashError::NoBuckets`].
    pub fn build(self, bucket_count: usize) -> Box<dyn BucketHasher> {
        match self {
            Self::Chars => Box::new(CharXorShift::new(bucket_count)),
            Self::Bytes => Box::new(ByteXorShift::new(bucket_count)),
            Self::Fnv => Box::new(FnvBucketHasher::new(bucket_count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(HashStrategy::Chars, "chars")]
    #[test_case(HashStrategy::Bytes, "bytes")]
    #[test_case(HashStrategy::Fnv, "fnv")]
    fn test_build_names(strategy: HashStrategy, name: &str) {
        let hasher = strategy.build(64);
        assert_eq!(hasher.name(), name);
        assert_eq!(hasher.bucket_count(), 64);
    }

    #[test_case(HashStrategy::Chars)]
    #[test_case(HashStrategy::Bytes)]
    #[test_case(HashStrategy::Fnv)]
    fn test_zero_buckets_is_an_error(strategy: HashStrategy) {
        let hasher = strategy.build(0);
        assert_eq!(
            hasher.bucket("hello"),
            Err(HashError::NoBuckets {
                strategy: hasher.name()
            })
        );
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&HashStrategy::Bytes).unwrap();
        assert_eq!(json, "\"bytes\"");

        let parsed: HashStrategy = serde_json::from_str("\"fnv\"").unwrap();
        assert_eq!(parsed, HashStrategy::Fnv);
    }
}
