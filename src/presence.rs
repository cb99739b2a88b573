// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Presence checks: an `Option` that must be `Some`.

use crate::error::ArgumentError;

/// Return the contained value, or fail with [`ArgumentError::Null`].
///
/// References pass through untouched, so `not_null("x", Some(&v))` yields
/// `&v` itself rather than a copy.
///
/// ```
/// let config = String::from("release");
/// let checked = argument::not_null("config", Some(&config)).unwrap();
/// assert!(std::ptr::eq(checked, &config));
///
/// let err = argument::not_null::<u32>("retries", None).unwrap_err();
/// assert_eq!(err.name(), "retries");
/// ```
#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn not_null<T>(name: &str, value: Option<T>) -> Result<T, ArgumentError> {
    match value {
        Some(value) => Ok(value),
        None => Err(ArgumentError::null(name)),
    }
}
