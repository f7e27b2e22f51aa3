// Copyright (c) 2025 Bucketstat Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! First/middle/last XOR-shift bucket hashes.
//!
//! Both hashers pack four small values into one integer,
//! `first << 24 | middle << 16 | last << 8 | len`, and run it through
//! [`mix`]. They differ in what a "character" is: [`CharXorShift`] works on
//! Unicode scalar values and an untruncated 64-bit accumulator, while
//! [`ByteXorShift`] works on UTF-8 bytes packed into a `u32` the way a
//! sharded string pool picks its shard.

use super::{reduce, BucketHasher, HashError, HashResult};

/// Right-shift amounts of the three XOR-shift rounds.
const SHIFTS: [u32; 3] = [19, 13, 5];

/// Scrambles a packed value with three XOR-shift rounds.
#[inline]
pub fn mix(mut x: u64) -> u64 {
    for shift in SHIFTS {
        x ^= x >> shift;
    }
    x
}

/// XOR-shift bucket hash over Unicode scalar values.
///
/// The middle character is the one at index `char_len / 2`. The length is
/// the character count and is OR-ed in without truncation, so words longer
/// than 255 characters bleed into the bits of the last character.
#[derive(Debug, Clone, Copy)]
pub struct CharXorShift {
    bucket_count: usize,
}

impl CharXorShift {
    /// Creates the hasher over `bucket_count` buckets.
    pub fn new(bucket_count: usize) -> Self {
        Self { bucket_count }
    }

    fn pack(word: &str) -> Option<u64> {
        let len = word.chars().count();
        let first = word.chars().next()?;
        let middle = word.chars().nth(len / 2)?;
        let last = word.chars().next_back()?;

        Some(
            (u64::from(first) << 24)
                | (u64::from(middle) << 16)
                | (u64::from(last) << 8)
                | len as u64,
        )
    }
}

impl BucketHasher for CharXorShift {
    fn name(&self) -> &'static str {
        "chars"
    }

    fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    fn bucket(&self, word: &str) -> HashResult<usize> {
        let packed = Self::pack(word).ok_or(HashError::EmptyWord {
            strategy: self.name(),
        })?;
        reduce(mix(packed), self.bucket_count, self.name())
    }
}

/// XOR-shift bucket hash over UTF-8 bytes.
///
/// The byte length is truncated to 8 bits and missing bytes read as zero,
/// so every input, including the empty string, has a bucket.
#[derive(Debug, Clone, Copy)]
pub struct ByteXorShift {
    bucket_count: usize,
}

impl ByteXorShift {
    /// Creates the hasher over `bucket_count` buckets.
    pub fn new(bucket_count: usize) -> Self {
        Self { bucket_count }
    }

    fn pack(word: &str) -> u32 {
        let bytes = word.as_bytes();

        let len = bytes.len() as u8;
        let last = bytes.last().copied().unwrap_or(0);
        let middle = bytes.get(bytes.len() / 2).copied().unwrap_or(0);
        let first = bytes.first().copied().unwrap_or(0);

        u32::from_be_bytes([first, middle, last, len])
    }
}

impl BucketHasher for ByteXorShift {
    fn name(&self) -> &'static str {
        "bytes"
    }

    fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    fn bucket(&self, word: &str) -> HashResult<usize> {
        let packed = u64::from(Self::pack(word));
        reduce(mix(packed), self.bucket_count, self.name())
    }
}
