// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mapping command-line strings onto the typed checks.
//!
//! Numbers parse as `i64` when they can and `f64` otherwise. The cast rules
//! infer a dynamic type for the raw value (int, float, bool, then string) and
//! narrow it to the requested target, so `--value 3 --as float` is rejected
//! the same way `cast::<f64>` rejects a boxed `i64`.

use super::{Rule, Target};
use argument::{
    cast, greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, not_null,
    not_null_and_cast, not_null_or_empty, not_null_or_white_space, positive_non_zero,
    positive_or_zero, AnyValue, ArgumentError,
};
use std::any::Any;
use std::fmt;

/// The invocation could not be turned into a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    MissingThreshold { rule: &'static str },
    MissingTarget { rule: &'static str },
    NotANumber { flag: &'static str, text: String },
    NotAnInteger { rule: &'static str, text: String },
    MixedNumbers { value: String, threshold: String },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingThreshold { rule } => {
                write!(f, "rule '{}' needs --threshold", rule)
            }
            UsageError::MissingTarget { rule } => write!(f, "rule '{}' needs --as", rule),
            UsageError::NotANumber { flag, text } => {
                write!(f, "{} '{}' is not a number", flag, text)
            }
            UsageError::NotAnInteger { rule, text } => {
                write!(f, "rule '{}' needs an integer, got '{}'", rule, text)
            }
            UsageError::MixedNumbers { value, threshold } => write!(
                f,
                "value '{}' and threshold '{}' must both be integers or both be decimals",
                value, threshold
            ),
        }
    }
}

impl std::error::Error for UsageError {}

/// What `check` decided.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Passed; `None` when an absent value was allowed through by `cast`.
    Passed(Option<String>),
    Failed(ArgumentError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Int(i64),
    Float(f64),
}

fn parse_number(flag: &'static str, text: &str) -> Result<Number, UsageError> {
    if let Ok(int) = text.parse::<i64>() {
        return Ok(Number::Int(int));
    }
    text.parse::<f64>()
        .map(Number::Float)
        .map_err(|_| UsageError::NotANumber {
            flag,
            text: text.to_string(),
        })
}

/// Dynamic type of a raw command-line value.
pub fn infer(text: &str) -> Box<dyn AnyValue> {
    if let Ok(int) = text.parse::<i64>() {
        return Box::new(int);
    }
    if let Ok(float) = text.parse::<f64>() {
        return Box::new(float);
    }
    if let Ok(flag) = text.parse::<bool>() {
        return Box::new(flag);
    }
    Box::new(text.to_string())
}

fn narrow<T: Any + fmt::Display>(
    rule: Rule,
    name: &str,
    value: Option<&dyn AnyValue>,
) -> Result<Option<String>, ArgumentError> {
    if rule == Rule::NotNullAndCast {
        return not_null_and_cast::<T>(name, value).map(|v| Some(v.to_string()));
    }
    cast::<T>(name, value).map(|v| v.map(ToString::to_string))
}

fn compare<T: PartialOrd + fmt::Display>(
    rule: Rule,
    name: &str,
    value: T,
    threshold: T,
) -> Result<T, ArgumentError> {
    match rule {
        Rule::GreaterThan => greater_than(name, value, threshold),
        Rule::GreaterThanOrEqualTo => greater_than_or_equal_to(name, value, threshold),
        Rule::LessThan => less_than(name, value, threshold),
        _ => less_than_or_equal_to(name, value, threshold),
    }
}

/// Run `rule` against the raw command-line strings.
pub fn evaluate(
    rule: Rule,
    name: &str,
    value: Option<&str>,
    threshold: Option<&str>,
    target: Option<Target>,
) -> Result<Outcome, UsageError> {
    let result = match rule {
        Rule::NotNull => not_null(name, value).map(str::to_string),
        Rule::NotEmpty => not_null_or_empty(name, value).map(str::to_string),
        Rule::NotWhiteSpace => not_null_or_white_space(name, value).map(str::to_string),
        Rule::Cast | Rule::NotNullAndCast => {
            let target = target.ok_or(UsageError::MissingTarget {
                rule: rule.as_str(),
            })?;
            let boxed = value.map(infer);
            let dynamic = boxed.as_deref();
            let narrowed = match target {
                Target::Int => narrow::<i64>(rule, name, dynamic),
                Target::Float => narrow::<f64>(rule, name, dynamic),
                Target::Bool => narrow::<bool>(rule, name, dynamic),
                Target::String => narrow::<String>(rule, name, dynamic),
            };
            return Ok(match narrowed {
                Ok(shown) => Outcome::Passed(shown),
                Err(error) => Outcome::Failed(error),
            });
        }
        Rule::PositiveOrZero | Rule::PositiveNonZero => match value {
            None => not_null::<&str>(name, None).map(str::to_string),
            Some(text) => {
                let int = match parse_number("--value", text)? {
                    Number::Int(int) => int,
                    Number::Float(_) => {
                        return Err(UsageError::NotAnInteger {
                            rule: rule.as_str(),
                            text: text.to_string(),
                        })
                    }
                };
                if rule == Rule::PositiveOrZero {
                    positive_or_zero(name, int).map(|v| v.to_string())
                } else {
                    positive_non_zero(name, int).map(|v| v.to_string())
                }
            }
        },
        Rule::GreaterThan
        | Rule::GreaterThanOrEqualTo
        | Rule::LessThan
        | Rule::LessThanOrEqualTo => {
            let bound = threshold.ok_or(UsageError::MissingThreshold {
                rule: rule.as_str(),
            })?;
            let bound = parse_number("--threshold", bound)?;
            match value {
                None => not_null::<&str>(name, None).map(str::to_string),
                Some(text) => match (parse_number("--value", text)?, bound) {
                    (Number::Int(v), Number::Int(t)) => {
                        compare(rule, name, v, t).map(|v| v.to_string())
                    }
                    (Number::Float(v), Number::Float(t)) => {
                        compare(rule, name, v, t).map(|v| v.to_string())
                    }
                    _ => {
                        return Err(UsageError::MixedNumbers {
                            value: text.to_string(),
                            threshold: threshold.unwrap_or_default().to_string(),
                        })
                    }
                },
            }
        }
    };

    Ok(match result {
        Ok(shown) => Outcome::Passed(Some(shown)),
        Err(error) => Outcome::Failed(error),
    })
}
