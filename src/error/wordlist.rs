//! Word list loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a word list.
#[derive(Error, Debug)]
pub enum WordListError {
    /// The word list file does not exist.
    #[error("Word list not found: {0}")]
    NotFound(PathBuf),

    /// The word list exists but could not be read.
    #[error("Failed to read word list {path}: {source}")]
    Read {
        /// Path of the word list
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A line of the word list is empty.
    #[error("Empty word at line {line}")]
    EmptyWord {
        /// 1-based line number
        line: usize,
    },
}
