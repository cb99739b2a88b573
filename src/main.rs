// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, ValueEnum};
use serde::Serialize;

mod cli;
use cli::display;
use cli::evaluate::{evaluate, Outcome};
use cli::{Cli, Commands, Rule};

/// Exit code for a value the rule rejected.
const EXIT_REJECTED: i32 = 1;
/// Exit code for a malformed invocation (same as clap's).
const EXIT_USAGE: i32 = 2;

#[derive(Serialize)]
struct Report<'a> {
    ok: bool,
    rule: &'static str,
    name: &'a str,
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<serde_json::Value>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            rule,
            name,
            value,
            threshold,
            target,
            json,
        } => {
            let outcome = match evaluate(rule, &name, value.as_deref(), threshold.as_deref(), target)
            {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(EXIT_USAGE);
                }
            };
            let passed = matches!(outcome, Outcome::Passed(_));
            if json {
                print_json(rule, &name, value.as_deref(), &outcome);
            } else {
                print_human(&name, &outcome);
            }
            if !passed {
                std::process::exit(EXIT_REJECTED);
            }
        }
        Commands::Rules => print_rules(),
    }
}

fn print_human(name: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Passed(shown) => println!("{}", display::passed_line(name, shown.as_deref())),
        Outcome::Failed(error) => eprintln!("{}", display::failed_line(error)),
    }
}

fn print_json(rule: Rule, name: &str, value: Option<&str>, outcome: &Outcome) {
    let error = match outcome {
        Outcome::Passed(_) => None,
        Outcome::Failed(error) => {
            let mut rendered = match serde_json::to_value(error) {
                Ok(rendered) => rendered,
                Err(e) => {
                    eprintln!("❌ failed to serialize error: {}", e);
                    std::process::exit(EXIT_USAGE);
                }
            };
            rendered["message"] = serde_json::Value::String(error.message());
            Some(rendered)
        }
    };
    let report = Report {
        ok: error.is_none(),
        rule: rule.as_str(),
        name,
        value,
        error,
    };
    match serde_json::to_string(&report) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("❌ failed to serialize report: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn print_rules() {
    let width = Rule::value_variants()
        .iter()
        .map(|rule| rule.as_str().len())
        .max()
        .unwrap_or(0);
    println!("Rules accepted by `argument check`:");
    println!();
    for rule in Rule::value_variants() {
        let mut description = rule.describe().to_string();
        if rule.needs_threshold() {
            description.push_str(" (needs --threshold)");
        }
        println!("{}", display::rule_row(rule.as_str(), &description, width));
    }
}
