//! Word list loading.
//!
//! A word list is a newline-delimited UTF-8 file. It is read in one go,
//! the file handle is released before any hashing happens, and the words
//! are kept in their original order.

use crate::error::wordlist::WordListError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, instrument};

/// Ordered, immutable list of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Box<[String]>,
}

impl WordList {
    /// Reads the word list at `path`.
    ///
    /// Lines end with `\n` or `\r\n`; a trailing newline does not produce an
    /// empty word. Any other empty line is rejected. A bare `\r` or other
    /// Unicode line separator is part of the word.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => WordListError::NotFound(path.to_path_buf()),
            _ => WordListError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let list = Self::parse(&contents)?;
        debug!(words = list.len(), "Word list loaded");
        Ok(list)
    }

    /// Parses newline-delimited text into a word list.
    pub fn parse(contents: &str) -> Result<Self, WordListError> {
        let words = contents
            .lines()
            .enumerate()
            .map(|(index, line)| {
                if line.is_empty() {
                    Err(WordListError::EmptyWord { line: index + 1 })
                } else {
                    Ok(line.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            words: words.into_boxed_slice(),
        })
    }

    /// Builds a word list from already split words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The words in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterates the words in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
