// Copyright (c) 2025 Bucketstat Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket occupancy counts and their summary statistics.

use crate::error::analysis::{AnalysisError, AnalysisResult};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Number of words that landed in each bucket.
///
/// Only buckets that were hit have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    counts: HashMap<usize, usize>,
}

impl FrequencyMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `bucket`.
    pub fn record(&mut self, bucket: usize) {
        *self.counts.entry(bucket).or_insert(0) += 1;
    }

    /// Occurrences of `bucket`, zero if it was never hit.
    pub fn get(&self, bucket: usize) -> usize {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Number of distinct buckets hit.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no bucket was hit.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of values recorded.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(bucket, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&bucket, &count)| (bucket, count))
    }

    /// `(bucket, count)` pairs, most common first, ties by ascending bucket.
    pub fn most_common(&self) -> Vec<(usize, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

impl FromIterator<usize> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut map = Self::new();
        for bucket in iter {
            map.record(bucket);
        }
        map
    }
}

impl<const N: usize> From<[(usize, usize); N]> for FrequencyMap {
    fn from(entries: [(usize, usize); N]) -> Self {
        Self {
            counts: entries.into_iter().collect(),
        }
    }
}

/// Summary statistics of a [`FrequencyMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Distinct buckets hit
    pub buckets: usize,
    /// Smallest count among buckets hit
    pub min: usize,
    /// Largest count
    pub max: usize,
    /// `max - min`
    pub delta: usize,
    /// Arithmetic mean of the counts of buckets hit
    pub mean: f64,
    /// Buckets out of `bucket_count` that were never hit
    pub empty_buckets: usize,
    /// Population standard deviation of the counts of buckets hit
    pub std_dev: f64,
    /// Pearson's chi-squared against a uniform spread over all buckets
    pub chi_squared: f64,
}

impl Summary {
    /// Summarizes `frequencies` for a hash reducing into `bucket_count` buckets.
    ///
    /// Fails with [`AnalysisError::EmptyFrequencyMap`] when nothing was
    /// recorded, since min and max have no value then.
    pub fn from_frequencies(
        frequencies: &FrequencyMap,
        bucket_count: usize,
    ) -> AnalysisResult<Self> {
        let min = frequencies
            .iter()
            .map(|(_, count)| count)
            .min()
            .ok_or(AnalysisError::EmptyFrequencyMap)?;
        let max = frequencies
            .iter()
            .map(|(_, count)| count)
            .max()
            .ok_or(AnalysisError::EmptyFrequencyMap)?;

        let buckets = frequencies.len();
        // Integer sum is exact; only the final division rounds.
        let total = frequencies.iter().map(|(_, count)| count as u128).sum::<u128>();
        let mean = total as f64 / buckets as f64;

        Ok(Self {
            buckets,
            min,
            max,
            delta: max - min,
            mean,
            empty_buckets: bucket_count.saturating_sub(buckets),
            std_dev: welford_std_dev(frequencies.iter().map(|(_, count)| count as f64)),
            chi_squared: chi_squared(frequencies, bucket_count, total as f64),
        })
    }
}

/// Population standard deviation in a single pass.
fn welford_std_dev(values: impl Iterator<Item = f64>) -> f64 {
    let (n, _, m2) = values.fold((0u64, 0.0f64, 0.0f64), |(n, mean, m2), value| {
        let n = n + 1;
        let delta = value - mean;
        let mean = mean + delta / n as f64;
        (n, mean, m2 + delta * (value - mean))
    });

    if n == 0 {
        0.0
    } else {
        (m2 / n as f64).sqrt()
    }
}

fn chi_squared(frequencies: &FrequencyMap, bucket_count: usize, total: f64) -> f64 {
    let expected = total / bucket_count as f64;
    let hit: f64 = frequencies
        .iter()
        .map(|(_, count)| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();
    // Every empty bucket contributes (0 - e)^2 / e = e.
    let empty = bucket_count.saturating_sub(frequencies.len()) as f64 * expected;
    hit + empty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_summary() {
        let frequencies = FrequencyMap::from([(0, 5), (1, 2), (2, 5)]);
        let summary = Summary::from_frequencies(&frequencies, 3).unwrap();

        assert_eq!(summary.buckets, 3);
        assert_eq!(summary.max, 5);
        assert_eq!(summary.min, 2);
        assert_eq!(summary.delta, 3);
        assert_eq!(summary.mean, 4.0);
        assert_eq!(summary.empty_buckets, 0);
        assert!((summary.std_dev - 2.0f64.sqrt()).abs() < 1e-12);
        // expected 4 per bucket: (1 + 4 + 1) / 4
        assert!((summary.chi_squared - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_map_is_an_error() {
        let result = Summary::from_frequencies(&FrequencyMap::new(), 64);
        assert_eq!(result, Err(AnalysisError::EmptyFrequencyMap));
    }

    #[test]
    fn test_empty_buckets_count_towards_chi_squared() {
        let frequencies = FrequencyMap::from([(0, 4)]);
        let summary = Summary::from_frequencies(&frequencies, 4).unwrap();

        assert_eq!(summary.empty_buckets, 3);
        assert_eq!(summary.std_dev, 0.0);
        // expected 1 per bucket: 9 + 1 + 1 + 1
        assert!((summary.chi_squared - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_record_and_total() {
        let frequencies: FrequencyMap = [3, 1, 3, 3, 0].into_iter().collect();

        assert_eq!(frequencies.len(), 3);
        assert_eq!(frequencies.total(), 5);
        assert_eq!(frequencies.get(3), 3);
        assert_eq!(frequencies.get(42), 0);
    }

    #[test]
    fn test_most_common_order() {
        let frequencies = FrequencyMap::from([(9, 1), (2, 5), (7, 5), (4, 3)]);
        assert_eq!(
            frequencies.most_common(),
            vec![(2, 5), (7, 5), (4, 3), (9, 1)]
        );
    }
}
