//! Integration tests for the bucketstat analysis pipeline.
//! Loads word lists from disk and checks the rendered report end to end.

use std::fs;

use bucketstat_lib::analysis::{analyze, OutputFormat, Report, Run, RunPolicy};
use bucketstat_lib::error::wordlist::WordListError;
use bucketstat_lib::error::BucketstatError;
use bucketstat_lib::hasher::{BucketHasher, HashStrategy};
use bucketstat_lib::wordlist::WordList;
use tempfile::tempdir;

const WORDS: &str = "apple\nbanana\ncherry\ndate\nelderberry\nfig\ngrape\nhoneydew\n";

#[test]
fn test_report_from_word_list_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("english.txt");
    fs::write(&path, WORDS).unwrap();

    let words = WordList::load(&path).unwrap();
    let hasher = HashStrategy::Chars.build(64);
    let report = analyze(&words, hasher.as_ref(), RunPolicy::ScoreTrailing).unwrap();

    assert_eq!(report.words, 8);
    assert_eq!(report.frequencies.total(), 8);
    assert_eq!(report.strategy, "chars");

    // Every word's bucket is accounted for.
    for word in words.iter() {
        let bucket = hasher.bucket(word).unwrap();
        assert!(report.frequencies.get(bucket) >= 1, "{word}");
    }

    let mut out = Vec::new();
    report.write_to(&mut out, OutputFormat::Text, false).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&format!("len: {} ", report.summary.buckets)));
    assert!(lines[0].contains("longest: ("));
    assert!(lines[1].starts_with('{') && lines[1].ends_with('}'));
}

#[test]
fn test_single_bucket_word_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("collide.txt");
    fs::write(&path, "abcd\naacd\nazcd\na1cd\n").unwrap();

    let words = WordList::load(&path).unwrap();
    for strategy in [HashStrategy::Chars, HashStrategy::Bytes] {
        let hasher = strategy.build(64);
        let report = analyze(&words, hasher.as_ref(), RunPolicy::Preserve).unwrap();

        assert_eq!(report.frequencies.len(), 1);
        assert_eq!(report.summary.max, 4);
        assert_eq!(report.summary.min, 4);
        assert_eq!(report.summary.mean, 4.0);
        // The only run reaches the end, so the historical policy never scores it.
        assert_eq!(report.longest_run, None);
    }
}

#[test]
fn test_trailing_run_policy_changes_output() {
    let words = WordList::from_words(["kiwi", "abcd", "aacd", "azcd"]);
    let hasher = HashStrategy::Chars.build(64);
    let tail = hasher.bucket("abcd").unwrap();
    assert_ne!(hasher.bucket("kiwi").unwrap(), tail);

    let fixed = analyze(&words, hasher.as_ref(), RunPolicy::ScoreTrailing).unwrap();
    let preserved = analyze(&words, hasher.as_ref(), RunPolicy::Preserve).unwrap();

    assert_eq!(fixed.longest_run, Some(Run::new(tail, 3)));
    assert_eq!(preserved.longest_run.map(|run| run.length), Some(1));
}

#[test]
fn test_missing_word_list() {
    let dir = tempdir().unwrap();
    let err = WordList::load(dir.path().join("english.txt")).unwrap_err();
    assert!(matches!(err, WordListError::NotFound(_)));
}

#[test]
fn test_blank_line_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.txt");
    fs::write(&path, "one\ntwo\n\nfour\n").unwrap();

    let err: BucketstatError = WordList::load(&path).unwrap_err().into();
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_empty_word_list_fails_analysis() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let words = WordList::load(&path).unwrap();
    let hasher = HashStrategy::Fnv.build(64);
    assert!(analyze(&words, hasher.as_ref(), RunPolicy::ScoreTrailing).is_err());
}

#[test]
fn test_json_report_roundtrip() {
    let words = WordList::parse(WORDS).unwrap();
    let hasher = HashStrategy::Bytes.build(16);
    let report = analyze(&words, hasher.as_ref(), RunPolicy::ScoreTrailing).unwrap();

    let mut out = Vec::new();
    report.write_to(&mut out, OutputFormat::Json, false).unwrap();
    let parsed: Report = serde_json::from_slice(&out).unwrap();

    assert_eq!(parsed.frequencies, report.frequencies);
    assert_eq!(parsed.longest_run, report.longest_run);
    assert_eq!(parsed.summary.buckets, report.summary.buckets);
    assert_eq!(parsed.summary.delta, report.summary.delta);
}
