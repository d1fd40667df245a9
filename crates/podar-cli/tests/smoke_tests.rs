//! Smoke tests for podador CLI
//!
//! These tests verify basic CLI functionality and the end-to-end
//! filtering behavior against real source files on disk.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the podador binary
fn podador() -> Command {
    Command::cargo_bin("podador").expect("podador binary should exist")
}

/// Write a source file into `dir` and return its path as a string
fn write_source(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("source file should be writable");
    path.display().to_string()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    podador()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    podador()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("coverage"))
        .stdout(predicate::str::contains("trim"))
        .stdout(predicate::str::contains("rules"));
}

#[test]
fn test_no_args_shows_help() {
    // Running with no args should error gracefully
    podador().assert().failure(); // Requires a subcommand
}

#[test]
fn test_trim_subcommand_help() {
    podador()
        .args(["trim", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stdin"));
}

#[test]
fn test_rules_subcommand_help() {
    podador()
        .args(["rules", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rule"));
}

// ============================================================================
// Rules Command Tests
// ============================================================================

#[test]
fn test_rules_text_output() {
    podador()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("g_assert_not_reached"))
        .stdout(predicate::str::contains("g_return_if_fail"));
}

#[test]
fn test_rules_json_output() {
    podador()
        .args(["rules", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"line\""))
        .stdout(predicate::str::contains("\"branch\""))
        .stdout(predicate::str::contains("G_DEFINE_TYPE"));
}

// ============================================================================
// Trim Command Tests
// ============================================================================

#[test]
fn test_trim_passes_unrelated_records_through() {
    podador()
        .arg("trim")
        .write_stdin("TN:mytest\nFN:3,main\nend_of_record\n")
        .assert()
        .success()
        .stdout("TN:mytest\nFN:3,main\nend_of_record\n");
}

#[test]
fn test_trim_drops_suppressed_line_record() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "a.c", "int f (void)\n{\n  g_assert_not_reached ();\n}\n");

    podador()
        .arg("trim")
        .write_stdin(format!("SF:{source}\nDA:3,5\n"))
        .assert()
        .success()
        .stdout(format!("SF:{source}\n"));
}

#[test]
fn test_trim_keeps_unmatched_branch_record() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "a.c", "a\nb\nreturn x + y;\n");

    let input = format!("SF:{source}\nBRDA:3,0,0,5\n");
    podador()
        .arg("trim")
        .write_stdin(input.clone())
        .assert()
        .success()
        .stdout(input);
}

#[test]
fn test_trim_reads_input_file_and_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "a.c", "  g_return_if_fail (x);\nok;\n");

    let trace = dir.path().join("coverage.info");
    fs::write(
        &trace,
        format!("SF:{source}\nBRDA:1,0,0,1\nDA:2,3\nend_of_record\n"),
    )
    .unwrap();
    let out = dir.path().join("trimmed.info");

    podador()
        .args(["trim", "--input"])
        .arg(&trace)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let trimmed = fs::read_to_string(&out).unwrap();
    assert_eq!(trimmed, format!("SF:{source}\nDA:2,3\nend_of_record\n"));
}

#[test]
fn test_trim_summary_reports_counts() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "a.c", "  g_assert_not_reached ();\n");

    podador()
        .args(["trim", "--summary"])
        .write_stdin(format!("SF:{source}\nDA:1,1\n"))
        .assert()
        .success()
        .stderr(predicate::str::contains("\"lines_suppressed\": 1"));
}

// ============================================================================
// Fatal Condition Tests
// ============================================================================

#[test]
fn test_trim_fails_on_coverage_before_source_file() {
    podador()
        .arg("trim")
        .write_stdin("BRDA:1,0,0,1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no preceding SF"));
}

#[test]
fn test_trim_fails_on_out_of_range_line() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "a.c", "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n");

    podador()
        .arg("trim")
        .write_stdin(format!("SF:{source}\nDA:999,1\n"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_trim_fails_on_unreadable_source_file() {
    podador()
        .arg("trim")
        .write_stdin("SF:no/such/file.c\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read source file"));
}

#[test]
fn test_trim_fails_on_malformed_line_number() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "a.c", "fine\n");

    podador()
        .arg("trim")
        .write_stdin(format!("SF:{source}\nDA:abc,5\n"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed line number"));
}

#[test]
fn test_trim_fails_on_missing_input_file() {
    podador()
        .args(["trim", "--input", "no/such/trace.info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

// ============================================================================
// Output Fidelity Tests
// ============================================================================

#[test]
fn test_trim_preserves_records_already_emitted_before_failure() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "a.c", "one\n");

    let assert = podador()
        .arg("trim")
        .write_stdin(format!("TN:t\nSF:{source}\nDA:2,1\n"))
        .assert()
        .failure();
    // Everything up to the fatal record was flushed.
    assert.stdout(format!("TN:t\nSF:{source}\n"));
}

#[test]
fn test_trim_preserves_missing_final_newline() {
    podador()
        .arg("trim")
        .write_stdin("TN:t\nend_of_record")
        .assert()
        .success()
        .stdout("TN:t\nend_of_record");
}
