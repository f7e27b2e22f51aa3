// Copyright (c) 2025 Bucketstat Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Longest run of consecutive equal values.
//!
//! A run is a maximal stretch of equal adjacent elements. [`Runs`] walks a
//! slice once with a cursor and yields every run; [`longest_run`] keeps the
//! first run of maximal length under a [`RunPolicy`].
//!
//! ```
//! use bucketstat_lib::analysis::{longest_run, Run, RunPolicy};
//!
//! let values = [1, 2, 2, 3, 3, 3];
//! assert_eq!(longest_run(&values, RunPolicy::ScoreTrailing), Some(Run::new(3, 3)));
//! assert_eq!(longest_run(&values, RunPolicy::Preserve), Some(Run::new(2, 2)));
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Whether a run that reaches the end of the sequence is scored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RunPolicy {
    /// Every maximal run is a candidate, including the last one
    #[default]
    ScoreTrailing,
    /// A run is only scored once a differing element ends it, so the run
    /// touching the end of the sequence never counts
    Preserve,
}

/// The value of a run and how many times it repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run<T> {
    /// Repeated value
    pub item: T,
    /// Number of consecutive repetitions
    pub length: usize,
}

impl<T> Run<T> {
    /// Creates a run of `length` copies of `item`.
    pub fn new(item: T, length: usize) -> Self {
        Self { item, length }
    }
}

/// One maximal run inside a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpan<'a, T> {
    /// Repeated value
    pub item: &'a T,
    /// Index of the first element of the run
    pub start: usize,
    /// Number of elements in the run
    pub length: usize,
}

impl<T> RunSpan<'_, T> {
    /// Whether this run extends to the last element of a slice of `len` items.
    pub fn is_trailing(&self, len: usize) -> bool {
        self.start + self.length == len
    }
}

/// Iterator over the maximal runs of a slice, in order.
#[derive(Debug, Clone)]
pub struct Runs<'a, T> {
    items: &'a [T],
    cursor: usize,
}

impl<'a, T> Runs<'a, T> {
    /// Creates the iterator over `items`.
    pub fn new(items: &'a [T]) -> Self {
        Self { items, cursor: 0 }
    }
}

impl<'a, T: PartialEq> Iterator for Runs<'a, T> {
    type Item = RunSpan<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor;
        let item = self.items.get(start)?;
        let length = self.items[start..]
            .iter()
            .take_while(|next| *next == item)
            .count();
        self.cursor += length;

        Some(RunSpan {
            item,
            start,
            length,
        })
    }
}

/// Finds the longest run in `items`.
///
/// Ties keep the earlier run. Returns `None` for an empty slice, and under
/// [`RunPolicy::Preserve`] also when no run is ever ended by a differing
/// element.
pub fn longest_run<T: PartialEq + Clone>(items: &[T], policy: RunPolicy) -> Option<Run<T>> {
    let mut best: Option<RunSpan<'_, T>> = None;

    for span in Runs::new(items) {
        if policy == RunPolicy::Preserve && span.is_trailing(items.len()) {
            break;
        }
        if best.as_ref().map_or(true, |best| span.length > best.length) {
            best = Some(span);
        }
    }

    best.map(|span| Run::new(span.item.clone(), span.length))
}

impl<T: Display> Display for Run<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.item, self.length)
    }
}

/// Formats an optional run, rendering the empty case as `(None, 0)`.
pub fn display_run<T: Display>(run: Option<&Run<T>>) -> String {
    match run {
        Some(run) => run.to_string(),
        None => "(None, 0)".to_string(),
    }
}
