//! Bucket hash function errors.

use thiserror::Error;

/// Errors raised by a bucket hash function.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum HashError {
    /// The strategy indexes the first, middle and last character, which an
    /// empty word does not have.
    #[error("Cannot hash an empty word with the {strategy} strategy")]
    EmptyWord {
        /// Name of the strategy that rejected the word
        strategy: &'static str,
    },

    /// The hasher was built over zero buckets.
    #[error("The {strategy} strategy has no buckets to hash into")]
    NoBuckets {
        /// Name of the strategy
        strategy: &'static str,
    },
}

/// Result type for bucket hash operations.
pub type HashResult<T> = Result<T, HashError>;
