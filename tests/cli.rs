//! CLI integration tests for anybase
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn anybase() -> Command {
    Command::cargo_bin("anybase").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    anybase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("arbitrary bases"));
}

#[test]
fn test_version() {
    anybase()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("anybase"));
}

#[test]
fn test_list_pools() {
    anybase()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base62"))
        .stdout(predicate::str::contains("base2"));
}

// ============================================================================
// Encode/Decode Round-trips
// ============================================================================

#[test]
fn test_encode_argument() {
    anybase()
        .arg("123456")
        .assert()
        .success()
        .stdout(predicate::eq("W7E\n"));
}

#[test]
fn test_encode_stdin() {
    anybase()
        .write_stdin("123456\n")
        .assert()
        .success()
        .stdout(predicate::eq("W7E\n"));
}

#[test]
fn test_decode() {
    anybase()
        .args(["--decode", "W7E"])
        .assert()
        .success()
        .stdout(predicate::eq("123456\n"));
}

#[test]
fn test_named_pool() {
    anybase()
        .args(["--pool", "base2", "5"])
        .assert()
        .success()
        .stdout(predicate::eq("101\n"));
}

#[test]
fn test_explicit_chars_override_named_pool() {
    anybase()
        .args(["--pool", "base16", "--chars", "AB", "10"])
        .assert()
        .success()
        .stdout(predicate::eq("BABA\n"));
}

#[test]
fn test_decode_with_separator() {
    anybase()
        .args(["--decode", "--separator", ",", "W7E"])
        .assert()
        .success()
        .stdout(predicate::eq("123,456\n"));
}

#[test]
fn test_zero_round_trip() {
    anybase()
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::eq("0\n"));
}

// ============================================================================
// Failure Modes
// ============================================================================

#[test]
fn test_unknown_pool_fails() {
    anybase()
        .args(["--pool", "base999", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_digit_fails() {
    anybase()
        .args(["--decode", "--pool", "base2", "G"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid digit"));
}

#[test]
fn test_invalid_decimal_fails() {
    anybase()
        .arg("12a3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid decimal"));
}

#[test]
fn test_duplicate_pool_chars_fail() {
    anybase()
        .args(["--chars", "ABA", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid digit pool"));
}
