//! Aggregation errors.

use thiserror::Error;

/// Errors that can occur while computing bucket statistics.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    /// Min and max are undefined over an empty frequency mapping.
    #[error("Frequency mapping is empty; min and max are undefined")]
    EmptyFrequencyMap,
}

/// Result type for aggregation operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
