//! Analysis configuration module.
//!
//! Selects the word list, the bucket hash function and how runs are scored.

use super::{ConfigResult, Validate};
use crate::analysis::RunPolicy;
use crate::error::config::ConfigError;
use crate::hasher::HashStrategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default word list, looked up in the working directory.
pub const DEFAULT_WORD_LIST: &str = "english.txt";

/// Default number of buckets.
pub const DEFAULT_BUCKET_COUNT: usize = 64;

/// Analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Path to the newline-delimited word list
    pub word_list: PathBuf,

    /// Number of buckets the hash reduces into
    pub bucket_count: usize,

    /// Bucket hash function to evaluate
    pub strategy: HashStrategy,

    /// Whether a run reaching the end of the sequence is scored
    pub run_policy: RunPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            word_list: PathBuf::from(DEFAULT_WORD_LIST),
            bucket_count: DEFAULT_BUCKET_COUNT,
            strategy: HashStrategy::default(),
            run_policy: RunPolicy::default(),
        }
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.word_list.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "word_list cannot be empty".to_string(),
            ));
        }

        if self.bucket_count == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "analysis.bucket_count".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
