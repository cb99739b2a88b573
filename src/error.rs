// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The failure taxonomy shared by every check.
//!
//! Each variant carries the parameter name exactly as the caller passed it,
//! so tests and tooling can match on *which* argument was rejected without
//! parsing message text.
//!
//! | Variant      | Raised by                                   | Message                                                |
//! |--------------|---------------------------------------------|--------------------------------------------------------|
//! | `Null`       | `not_null`, every `not_null_*` check        | `Value cannot be null.`                                |
//! | `Empty`      | `not_empty`, `not_null_or_empty`, blanks    | `Value cannot be empty.`                               |
//! | `WhiteSpace` | `not_white_space`, `not_null_or_white_space`| `Value cannot consist only of white-space characters.` |
//! | `Type`       | `cast`, `cast_ref`, `cast_box`              | `Value "<v>" is not of type "<T>".`                    |
//! | `OutOfRange` | integer sign checks, threshold checks       | the violated bound                                     |
//! | `Invalid`    | checks defined outside this crate           | caller supplied                                        |

use serde::Serialize;
use std::fmt;

pub(crate) const NULL_MESSAGE: &str = "Value cannot be null.";
pub(crate) const EMPTY_MESSAGE: &str = "Value cannot be empty.";
pub(crate) const WHITE_SPACE_MESSAGE: &str =
    "Value cannot consist only of white-space characters.";

/// Fieldless classification of an [`ArgumentError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Null,
    Empty,
    WhiteSpace,
    Type,
    OutOfRange,
    Invalid,
}

impl FailureKind {
    /// Stable identifier, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Null => "null",
            FailureKind::Empty => "empty",
            FailureKind::WhiteSpace => "white_space",
            FailureKind::Type => "type",
            FailureKind::OutOfRange => "out_of_range",
            FailureKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArgumentError {
    /// The argument was absent.
    Null { name: String },
    /// The argument was present but had no characters or elements.
    Empty { name: String },
    /// The argument was a non-empty string made only of white-space.
    WhiteSpace { name: String },
    /// The argument was not an instance of the requested type.
    Type {
        name: String,
        /// `Debug` rendering of the rejected value.
        value: String,
        /// Name of the type the value was narrowed to.
        target: String,
    },
    /// The argument fell outside an allowed bound.
    OutOfRange {
        name: String,
        /// `Display` rendering of the rejected value.
        value: String,
        /// The violated bound, e.g. `Value cannot be less than 10.`
        reason: String,
    },
    /// A rule defined outside this crate rejected the argument.
    Invalid { name: String, message: String },
}

impl ArgumentError {
    pub fn null(name: impl Into<String>) -> Self {
        ArgumentError::Null { name: name.into() }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        ArgumentError::Empty { name: name.into() }
    }

    pub fn white_space(name: impl Into<String>) -> Self {
        ArgumentError::WhiteSpace { name: name.into() }
    }

    pub fn type_mismatch(
        name: impl Into<String>,
        value: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        ArgumentError::Type {
            name: name.into(),
            value: value.into(),
            target: target.into(),
        }
    }

    pub fn out_of_range(
        name: impl Into<String>,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        ArgumentError::OutOfRange {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Failure for a rule that has no dedicated variant.
    ///
    /// This is the hook for checks written outside this crate: build the
    /// error here and return it from a function shaped like the built-ins.
    ///
    /// ```
    /// use argument::ArgumentError;
    ///
    /// fn even(name: &str, value: u32) -> Result<u32, ArgumentError> {
    ///     if value % 2 != 0 {
    ///         return Err(ArgumentError::invalid(name, "Value must be even."));
    ///     }
    ///     Ok(value)
    /// }
    ///
    /// let size = argument::positive_non_zero("size", 8u32).and_then(|v| even("size", v));
    /// assert_eq!(size, Ok(8));
    /// assert_eq!(even("size", 3).unwrap_err().name(), "size");
    /// ```
    pub fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        ArgumentError::Invalid {
            name: name.into(),
            message: message.into(),
        }
    }

    /// The parameter name passed to the failing check.
    pub fn name(&self) -> &str {
        match self {
            ArgumentError::Null { name }
            | ArgumentError::Empty { name }
            | ArgumentError::WhiteSpace { name }
            | ArgumentError::Type { name, .. }
            | ArgumentError::OutOfRange { name, .. }
            | ArgumentError::Invalid { name, .. } => name,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ArgumentError::Null { .. } => FailureKind::Null,
            ArgumentError::Empty { .. } => FailureKind::Empty,
            ArgumentError::WhiteSpace { .. } => FailureKind::WhiteSpace,
            ArgumentError::Type { .. } => FailureKind::Type,
            ArgumentError::OutOfRange { .. } => FailureKind::OutOfRange,
            ArgumentError::Invalid { .. } => FailureKind::Invalid,
        }
    }

    /// The explanation, without the parameter name.
    pub fn message(&self) -> String {
        match self {
            ArgumentError::Null { .. } => NULL_MESSAGE.to_string(),
            ArgumentError::Empty { .. } => EMPTY_MESSAGE.to_string(),
            ArgumentError::WhiteSpace { .. } => WHITE_SPACE_MESSAGE.to_string(),
            ArgumentError::Type { value, target, .. } => {
                format!("Value \"{}\" is not of type \"{}\".", value, target)
            }
            ArgumentError::OutOfRange { reason, .. } => reason.clone(),
            ArgumentError::Invalid { message, .. } => message.clone(),
        }
    }

    /// The rendered rejected value, for variants that record one.
    pub fn actual_value(&self) -> Option<&str> {
        match self {
            ArgumentError::Type { value, .. } | ArgumentError::OutOfRange { value, .. } => {
                Some(value)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Parameter '{}')", self.message(), self.name())?;
        if let ArgumentError::OutOfRange { value, .. } = self {
            write!(f, "\nActual value was {}.", value)?;
        }
        Ok(())
    }
}

impl std::error::Error for ArgumentError {}
