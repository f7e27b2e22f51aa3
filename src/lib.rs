//! bucketstat library
//!
//! Measures how evenly a bucket hash spreads a word list: bucket occupancy
//! statistics, the longest run of equal buckets in word order, and the full
//! frequency mapping. The binary crate wires these pieces to a CLI; they can
//! also be used directly.
//!
//! # Architecture
//!
//! The analysis is a single linear pipeline:
//! - [`wordlist`] loads the words once, in order
//! - [`hasher`] maps each word to a bucket
//! - [`analysis`] aggregates the buckets, finds the longest run and renders the report
//!
//! [`config`] and [`error`] carry the settings and failures of every stage.

pub mod analysis;
pub mod config;
pub mod error;
pub mod hasher;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for bucketstat.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
