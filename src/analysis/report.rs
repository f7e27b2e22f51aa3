//! Report rendering.
//!
//! The text form is two lines: the summary, then the frequency mapping
//! most-common first. The extended form appends a third line with the
//! supplementary metrics. The JSON form serializes the whole [`Report`].

use super::frequency::{FrequencyMap, Summary};
use super::runs::{display_run, Run};
use crate::error::BucketstatResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary line followed by the frequency mapping
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Result of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Name of the hash strategy evaluated
    pub strategy: String,
    /// Number of words hashed
    pub words: usize,
    /// Number of buckets the hash reduces into
    pub bucket_count: usize,
    /// Occupancy statistics
    pub summary: Summary,
    /// Longest run of equal buckets in word order
    pub longest_run: Option<Run<usize>>,
    /// Occupancy per bucket
    pub frequencies: FrequencyMap,
}

impl Report {
    /// Writes the report to `out` in the given format.
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        format: OutputFormat,
        extended: bool,
    ) -> BucketstatResult<()> {
        match format {
            OutputFormat::Text => {
                writeln!(out, "{}", self.summary_line())?;
                writeln!(out, "{}", self.frequency_line())?;
                if extended {
                    writeln!(out, "{}", self.extended_line())?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// `len: .. max: .. min: .. delta: .. mean: .. longest: (.., ..)`
    pub fn summary_line(&self) -> String {
        let summary = &self.summary;
        format!(
            "len: {} max: {} min: {} delta: {} mean: {:?} longest: {}",
            summary.buckets,
            summary.max,
            summary.min,
            summary.delta,
            summary.mean,
            display_run(self.longest_run.as_ref()),
        )
    }

    /// `{bucket: count, ...}`, most common first.
    pub fn frequency_line(&self) -> String {
        let entries = self
            .frequencies
            .most_common()
            .into_iter()
            .map(|(bucket, count)| format!("{bucket}: {count}"))
            .collect::<Vec<_>>();
        format!("{{{}}}", entries.join(", "))
    }

    /// Strategy, sizes and the supplementary metrics.
    pub fn extended_line(&self) -> String {
        format!(
            "strategy: {} words: {} bucket_count: {} empty: {} std_dev: {:.4} chi_squared: {:.4}",
            self.strategy,
            self.words,
            self.bucket_count,
            self.summary.empty_buckets,
            self.summary.std_dev,
            self.summary.chi_squared,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        let frequencies = FrequencyMap::from([(0, 5), (1, 2), (2, 5)]);
        Report {
            strategy: "chars".to_string(),
            words: 12,
            bucket_count: 3,
            summary: Summary::from_frequencies(&frequencies, 3).unwrap(),
            longest_run: Some(Run::new(2, 4)),
            frequencies,
        }
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        sample_report()
            .write_to(&mut out, OutputFormat::Text, false)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "len: 3 max: 5 min: 2 delta: 3 mean: 4.0 longest: (2, 4)\n{0: 5, 2: 5, 1: 2}\n"
        );
    }

    #[test]
    fn test_text_report_without_run() {
        let mut report = sample_report();
        report.longest_run = None;
        assert!(report.summary_line().ends_with("longest: (None, 0)"));
    }

    #[test]
    fn test_extended_line() {
        let mut out = Vec::new();
        sample_report()
            .write_to(&mut out, OutputFormat::Text, true)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let last = text.lines().last().unwrap();
        assert_eq!(
            last,
            "strategy: chars words: 12 bucket_count: 3 empty: 0 std_dev: 1.4142 chi_squared: 1.5000"
        );
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        sample_report()
            .write_to(&mut out, OutputFormat::Json, false)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["strategy"], "chars");
        assert_eq!(value["summary"]["delta"], 3);
        assert_eq!(value["longest_run"]["length"], 4);
        assert_eq!(value["frequencies"]["1"], 2);
    }
}
