// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the argument command-line interface.
//!
//! Two subcommands: `check` runs one rule against a value given on the
//! command line and reports through the exit code, `rules` lists what
//! `check` accepts. Leaving out `--value` checks an absent argument.

pub mod display;
pub mod evaluate;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "argument",
    about = "Run argument precondition checks from the command line",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check one value against a rule
    ///
    /// Exits 0 when the value passes, 1 when the rule rejects it and 2 when
    /// the invocation itself is malformed.
    Check {
        /// Rule to apply
        #[arg(value_enum)]
        rule: Rule,

        /// Parameter name reported on failure
        #[arg(short, long, default_value = "value")]
        name: String,

        /// Value under test; omit to check an absent argument
        #[arg(short, long, allow_hyphen_values = true)]
        value: Option<String>,

        /// Bound for the comparison rules
        #[arg(short, long, allow_hyphen_values = true)]
        threshold: Option<String>,

        /// Target type for the cast rules
        #[arg(long = "as", value_enum)]
        target: Option<Target>,

        /// Print the outcome as a JSON object on stdout
        #[arg(long)]
        json: bool,
    },

    /// List the rules accepted by `check`
    Rules,
}

/// A check selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rule {
    NotNull,
    NotEmpty,
    NotWhiteSpace,
    Cast,
    NotNullAndCast,
    PositiveOrZero,
    PositiveNonZero,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::NotNull => "not-null",
            Rule::NotEmpty => "not-empty",
            Rule::NotWhiteSpace => "not-white-space",
            Rule::Cast => "cast",
            Rule::NotNullAndCast => "not-null-and-cast",
            Rule::PositiveOrZero => "positive-or-zero",
            Rule::PositiveNonZero => "positive-non-zero",
            Rule::GreaterThan => "greater-than",
            Rule::GreaterThanOrEqualTo => "greater-than-or-equal-to",
            Rule::LessThan => "less-than",
            Rule::LessThanOrEqualTo => "less-than-or-equal-to",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Rule::NotNull => "value must be given",
            Rule::NotEmpty => "value must be given and non-empty",
            Rule::NotWhiteSpace => "value must contain a non-white-space character",
            Rule::Cast => "value, if given, must parse as --as",
            Rule::NotNullAndCast => "value must be given and parse as --as",
            Rule::PositiveOrZero => "integer value must be >= 0",
            Rule::PositiveNonZero => "integer value must be > 0",
            Rule::GreaterThan => "value must be > --threshold",
            Rule::GreaterThanOrEqualTo => "value must be >= --threshold",
            Rule::LessThan => "value must be < --threshold",
            Rule::LessThanOrEqualTo => "value must be <= --threshold",
        }
    }

    pub fn needs_threshold(self) -> bool {
        matches!(
            self,
            Rule::GreaterThan
                | Rule::GreaterThanOrEqualTo
                | Rule::LessThan
                | Rule::LessThanOrEqualTo
        )
    }
}

/// Type a dynamically inferred value is narrowed to by the cast rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Int,
    Float,
    Bool,
    String,
}
