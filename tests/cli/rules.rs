//! `argument rules` lists every rule `check` accepts.

use std::process::Command;

#[test]
fn lists_every_rule() {
    let output = Command::new(env!("CARGO_BIN_EXE_argument"))
        .arg("rules")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run the argument binary");
    assert!(output.status.success());

    let listing = String::from_utf8_lossy(&output.stdout);
    for rule in [
        "not-null",
        "not-empty",
        "not-white-space",
        "cast",
        "not-null-and-cast",
        "positive-or-zero",
        "positive-non-zero",
        "greater-than",
        "greater-than-or-equal-to",
        "less-than",
        "less-than-or-equal-to",
    ] {
        assert!(
            listing.lines().any(|line| line.trim_start().starts_with(rule)),
            "missing {} in:\n{}",
            rule,
            listing
        );
    }
    assert_eq!(listing.matches("(needs --threshold)").count(), 4);
}

#[test]
fn listing_is_plain_text_without_color() {
    let output = Command::new(env!("CARGO_BIN_EXE_argument"))
        .arg("rules")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run the argument binary");
    assert!(!output.stdout.contains(&0x1b));
}
