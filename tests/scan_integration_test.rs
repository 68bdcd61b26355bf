//! Integration tests for the scan procedure
//!
//! Covers extension filtering, recursion, and the end-to-end
//! match-and-decode-check behavior over a directory tree.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use utf8_auditor_rs::prelude::*;

fn write_file(path: &Path, content: &[u8]) {
    let mut file = File::create(path).unwrap();
    file.write_all(content).unwrap();
}

/// Run the full match-and-decode-check procedure over a tree
fn audit_tree(dir: &Path, extension: &str) -> Vec<AuditRecord> {
    collect_matching_files(dir, extension, true)
        .unwrap()
        .into_iter()
        .map(|path| {
            let failure = audit_file(&path).unwrap();
            AuditRecord { path, failure }
        })
        .collect()
}

/// The concrete scenario: a clean match, a malformed match, and a
/// non-matching file that must be skipped entirely
#[test]
fn test_mixed_tree_scenario() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir.path().join("a.ext"), b"hello");
    write_file(&temp_dir.path().join("b.ext"), b"\xFF\xFE");
    write_file(&temp_dir.path().join("c.txt"), b"\xFF\xFE");

    let records = audit_tree(temp_dir.path(), "ext");
    assert_eq!(records.len(), 2, "c.txt must not be visited");

    let lines: Vec<String> = records.iter().filter_map(diagnostic_line).collect();
    assert_eq!(lines.len(), 1, "exactly one diagnostic line expected");
    assert!(lines[0].contains("b.ext"));
    assert!(!lines[0].contains("a.ext"));
}

/// A tree with no matching files completes silently
#[test]
fn test_empty_tree() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir.path().join("readme.txt"), b"not a candidate");

    let records = audit_tree(temp_dir.path(), "vue");
    assert!(records.is_empty());
}

/// Matches are found arbitrarily deep in the tree
#[test]
fn test_nested_directories_are_scanned() {
    let temp_dir = TempDir::new().unwrap();
    let deep = temp_dir.path().join("a").join("b").join("c");
    fs::create_dir_all(&deep).unwrap();
    write_file(&deep.join("deep.vue"), b"\x80");

    let records = audit_tree(temp_dir.path(), "vue");
    assert_eq!(records.len(), 1);
    assert!(!records[0].is_clean());
}

/// Each path is visited at most once per run
#[test]
fn test_each_path_visited_once() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir.path().join("one.vue"), b"one");
    write_file(&temp_dir.path().join("two.vue"), b"two");

    let mut files = collect_matching_files(temp_dir.path(), "vue", true).unwrap();
    files.sort();
    let before = files.len();
    files.dedup();
    assert_eq!(files.len(), before);
}

/// Two scans over an unchanged tree produce identical output
#[test]
fn test_idempotent_scans() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir.path().join("good.vue"), b"fine");
    write_file(&temp_dir.path().join("bad.vue"), b"\xFF");
    write_file(&temp_dir.path().join("worse.vue"), b"x\xE2\x82");

    let lines = |records: Vec<AuditRecord>| -> Vec<String> {
        let mut lines: Vec<String> = records.iter().filter_map(diagnostic_line).collect();
        lines.sort();
        lines
    };

    let first = lines(audit_tree(temp_dir.path(), "vue"));
    let second = lines(audit_tree(temp_dir.path(), "vue"));
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

/// Summary totals reflect the records handed to the writer
#[test]
fn test_summary_counts() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir.path().join("good.vue"), b"fine");
    write_file(&temp_dir.path().join("bad.vue"), b"\xFF");

    let records = audit_tree(temp_dir.path(), "vue");

    let mut out = Vec::new();
    write_summary(&mut out, &records, false).unwrap();

    let content = String::from_utf8(out).unwrap();
    assert!(content.contains("Files checked: 2"));
    assert!(content.contains("Clean files: 1"));
    assert!(content.contains("Malformed files: 1"));
}
