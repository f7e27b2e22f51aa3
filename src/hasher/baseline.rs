// Copyright (c) 2025 Bucketstat Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! General-purpose baseline to compare the XOR-shift hashes against.

use super::{reduce, BucketHasher, HashResult};
use std::hash::Hasher;

/// FNV-1a 64 over the UTF-8 bytes of a word, reduced modulo the bucket count.
#[derive(Debug, Clone, Copy)]
pub struct FnvBucketHasher {
    bucket_count: usize,
}

impl FnvBucketHasher {
    /// Creates the hasher over `bucket_count` buckets.
    pub fn new(bucket_count: usize) -> Self {
        Self { bucket_count }
    }
}

impl BucketHasher for FnvBucketHasher {
    fn name(&self) -> &'static str {
        "fnv"
    }

    fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    fn bucket(&self, word: &str) -> HashResult<usize> {
        // Raw bytes only; `str::hash` would append a 0xff terminator.
        let mut hasher = fnv::FnvHasher::default();
        hasher.write(word.as_bytes());
        reduce(hasher.finish(), self.bucket_count, self.name())
    }
}
