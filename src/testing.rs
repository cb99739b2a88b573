//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::error::{ArgumentError, FailureKind};
use std::fmt::Debug;

/// Assert that a check failed with `kind` for parameter `name`, returning the error.
#[track_caller]
pub fn assert_rejected<T: Debug>(
    result: Result<T, ArgumentError>,
    kind: FailureKind,
    name: &str,
) -> ArgumentError {
    match result {
        Ok(value) => panic!("expected {} failure for '{}', got Ok({:?})", kind, name, value),
        Err(error) => {
            assert_eq!(error.kind(), kind, "wrong failure kind: {}", error);
            assert_eq!(error.name(), name, "wrong parameter name: {}", error);
            error
        }
    }
}

/// Assert that a check passed and handed back a value equal to `expected`.
#[track_caller]
pub fn assert_accepted<T: Debug + PartialEq>(result: Result<T, ArgumentError>, expected: &T) {
    match result {
        Ok(value) => assert_eq!(&value, expected),
        Err(error) => panic!("expected {:?} to pass, got: {}", expected, error),
    }
}
