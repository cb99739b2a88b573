// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a failed check into a panic.
//!
//! A rejected argument is a bug in the immediate caller. Where there is no
//! sensible error path (constructors of internal types, trait impls that
//! cannot return `Result`), abort instead of threading the error outward:
//!
//! ```should_panic
//! use argument::contracts::Checked;
//!
//! fn stride(step: i32) -> i32 {
//!     argument::positive_non_zero("step", step).or_panic()
//! }
//!
//! stride(0); // Contract violation: Value cannot be zero. (Parameter 'step') ...
//! ```
//!
//! Panics report the caller's location, not this module's.

use crate::error::ArgumentError;

/// Unwrap a check result, panicking with `Contract violation: <error>`.
#[inline]
#[track_caller]
pub fn require<T>(result: Result<T, ArgumentError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("Contract violation: {}", error),
    }
}

/// Method form of [`require`].
pub trait Checked<T> {
    fn or_panic(self) -> T;
}

impl<T> Checked<T> for Result<T, ArgumentError> {
    #[inline]
    #[track_caller]
    fn or_panic(self) -> T {
        require(self)
    }
}
