// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Blank-string checks.

use crate::error::ArgumentError;
use crate::presence::not_null;

/// Reject strings that are empty or made only of Unicode white-space.
///
/// White-space is `char::is_whitespace`, i.e. the Unicode `White_Space`
/// property, so U+00A0 and U+3000 count as blank too.
#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn not_white_space<S: AsRef<str>>(name: &str, value: S) -> Result<S, ArgumentError> {
    let text = value.as_ref();
    if text.is_empty() {
        return Err(ArgumentError::empty(name));
    }
    if text.chars().all(char::is_whitespace) {
        return Err(ArgumentError::white_space(name));
    }
    Ok(value)
}

/// [`not_null`] followed by [`not_white_space`].
///
/// ```
/// use argument::FailureKind;
///
/// assert_eq!(argument::not_null_or_white_space("label", Some(" a ")), Ok(" a "));
///
/// let err = argument::not_null_or_white_space("label", Some("   ")).unwrap_err();
/// assert_eq!(err.kind(), FailureKind::WhiteSpace);
/// ```
#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn not_null_or_white_space<S: AsRef<str>>(
    name: &str,
    value: Option<S>,
) -> Result<S, ArgumentError> {
    not_white_space(name, not_null(name, value)?)
}
