//! Test modules for bucketstat.
//!
//! This module contains the cross-module tests:
//! - Configuration loading and validation
//! - Error context and reporting
//! - Property-based tests of the hashers and the analysis pipeline
//! - Shared fixtures and proptest strategies


pub use test_utils::{bucket_sequence_strategy, word_strategy, TestFixture};
