//! `argument check` exit codes and output.

use std::process::{Command, Output};

const EXIT_PASSED: i32 = 0;
const EXIT_REJECTED: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn argument(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argument"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run the argument binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// ============================================================================
// EXIT CODES
// ============================================================================

#[test]
fn passing_value_exits_zero() {
    let output = argument(&["check", "not-white-space", "--name", "title", "--value", "Intro"]);
    assert_eq!(output.status.code(), Some(EXIT_PASSED));
    assert_eq!(stdout(&output).trim(), "✓ title = Intro");
}

#[test]
fn rejected_value_exits_one() {
    let output = argument(&["check", "not-white-space", "--name", "title", "--value", "  "]);
    assert_eq!(output.status.code(), Some(EXIT_REJECTED));
    let err = stderr(&output);
    assert!(err.contains("title"), "{}", err);
    assert!(err.contains("[white_space]"), "{}", err);
}

#[test]
fn absent_value_is_null() {
    let output = argument(&["check", "not-null", "--name", "config"]);
    assert_eq!(output.status.code(), Some(EXIT_REJECTED));
    assert!(stderr(&output).contains("Value cannot be null."));
}

#[test]
fn cast_lets_absent_value_through() {
    let output = argument(&["check", "cast", "--as", "int"]);
    assert_eq!(output.status.code(), Some(EXIT_PASSED));
    assert!(stdout(&output).contains("(absent)"));
}

#[test]
fn malformed_invocation_exits_two() {
    let output = argument(&["check", "greater-than", "--value", "3"]);
    assert_eq!(output.status.code(), Some(EXIT_USAGE));
    assert!(stderr(&output).contains("needs --threshold"));

    let output = argument(&["check", "less-than", "--value", "3", "--threshold", "2.5"]);
    assert_eq!(output.status.code(), Some(EXIT_USAGE));

    let output = argument(&["check", "no-such-rule"]);
    assert_eq!(output.status.code(), Some(EXIT_USAGE));
}

#[test]
fn negative_numbers_are_values_not_flags() {
    let output = argument(&["check", "greater-than", "--value", "-5", "--threshold", "-10"]);
    assert_eq!(output.status.code(), Some(EXIT_PASSED));

    let output = argument(&["check", "positive-or-zero", "--value", "-1"]);
    assert_eq!(output.status.code(), Some(EXIT_REJECTED));
    assert!(stderr(&output).contains("actual value: -1"));
}

// ============================================================================
// JSON OUTPUT
// ============================================================================

#[test]
fn json_report_for_passing_value() {
    let output = argument(&[
        "check",
        "greater-than-or-equal-to",
        "--name",
        "page",
        "--value",
        "1",
        "--threshold",
        "1",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(EXIT_PASSED));
    assert_eq!(
        json(&output),
        serde_json::json!({
            "ok": true,
            "rule": "greater-than-or-equal-to",
            "name": "page",
            "value": "1",
        })
    );
}

#[test]
fn json_report_for_rejected_value() {
    let output = argument(&[
        "check",
        "positive-non-zero",
        "--name",
        "retries",
        "--value",
        "0",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(EXIT_REJECTED));
    let report = json(&output);
    assert_eq!(report["ok"], false);
    assert_eq!(report["error"]["kind"], "out_of_range");
    assert_eq!(report["error"]["name"], "retries");
    assert_eq!(report["error"]["value"], "0");
    assert_eq!(report["error"]["message"], "Value cannot be zero.");
}

#[test]
fn json_report_for_type_mismatch() {
    let output = argument(&[
        "check",
        "not-null-and-cast",
        "--name",
        "port",
        "--value",
        "eighty",
        "--as",
        "int",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(EXIT_REJECTED));
    let report = json(&output);
    assert_eq!(report["error"]["kind"], "type");
    assert_eq!(report["error"]["name"], "port");
    assert_eq!(report["value"], "eighty");
}

#[test]
fn json_report_for_absent_value() {
    let output = argument(&["check", "not-empty", "--json"]);
    assert_eq!(output.status.code(), Some(EXIT_REJECTED));
    let report = json(&output);
    assert_eq!(report["value"], serde_json::Value::Null);
    assert_eq!(report["error"]["kind"], "null");
    assert_eq!(report["error"]["name"], "value");
}
