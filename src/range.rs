// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sign and threshold checks.
//!
//! Sign checks work on the primitive integers. Threshold checks accept any
//! `PartialOrd + Display` type, with value and threshold of the same type.
//! An unordered comparison (NaN on either side) fails the check, so
//! `greater_than("x", f64::NAN, 0.0)` and `less_than("x", f64::NAN, 0.0)`
//! are both errors.
//!
//! | Check                      | Passes when            | Reason on failure                                |
//! |----------------------------|------------------------|--------------------------------------------------|
//! | `positive_or_zero`         | `value >= 0`           | `Value cannot be negative.`                      |
//! | `positive_non_zero`        | `value > 0`            | `Value cannot be negative.` / `... be zero.`     |
//! | `greater_than`             | `value > threshold`    | `Value cannot be less than or equal to {t}.`     |
//! | `greater_than_or_equal_to` | `value >= threshold`   | `Value cannot be less than {t}.`                 |
//! | `less_than`                | `value < threshold`    | `Value cannot be greater than or equal to {t}.`  |
//! | `less_than_or_equal_to`    | `value <= threshold`   | `Value cannot be greater than {t}.`              |

use crate::error::ArgumentError;
use std::cmp::Ordering;
use std::fmt;

pub(crate) const NEGATIVE_MESSAGE: &str = "Value cannot be negative.";
pub(crate) const ZERO_MESSAGE: &str = "Value cannot be zero.";

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types accepted by the sign checks.
pub trait Integer: Copy + PartialOrd + fmt::Display + sealed::Sealed {
    const ZERO: Self;
}

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Integer for $ty {
                const ZERO: Self = 0;
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Reject negative integers.
#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn positive_or_zero<T: Integer>(name: &str, value: T) -> Result<T, ArgumentError> {
    if value < T::ZERO {
        return Err(ArgumentError::out_of_range(name, value, NEGATIVE_MESSAGE));
    }
    Ok(value)
}

/// Reject negative integers and zero.
///
/// The reason distinguishes the two cases.
///
/// ```
/// assert_eq!(argument::positive_non_zero("workers", 4_usize), Ok(4));
///
/// let err = argument::positive_non_zero("workers", 0_usize).unwrap_err();
/// assert_eq!(err.message(), "Value cannot be zero.");
/// ```
#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn positive_non_zero<T: Integer>(name: &str, value: T) -> Result<T, ArgumentError> {
    let value = positive_or_zero(name, value)?;
    if value == T::ZERO {
        return Err(ArgumentError::out_of_range(name, value, ZERO_MESSAGE));
    }
    Ok(value)
}

#[inline]
fn bounded<T, F>(
    name: &str,
    value: T,
    threshold: &T,
    accept: F,
    reason: &str,
) -> Result<T, ArgumentError>
where
    T: PartialOrd + fmt::Display,
    F: FnOnce(Ordering) -> bool,
{
    match value.partial_cmp(threshold) {
        Some(ordering) if accept(ordering) => Ok(value),
        _ => Err(ArgumentError::out_of_range(
            name,
            &value,
            format!("Value cannot be {} {}.", reason, threshold),
        )),
    }
}

#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn greater_than<T>(name: &str, value: T, threshold: T) -> Result<T, ArgumentError>
where
    T: PartialOrd + fmt::Display,
{
    bounded(
        name,
        value,
        &threshold,
        Ordering::is_gt,
        "less than or equal to",
    )
}

#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn greater_than_or_equal_to<T>(name: &str, value: T, threshold: T) -> Result<T, ArgumentError>
where
    T: PartialOrd + fmt::Display,
{
    bounded(name, value, &threshold, Ordering::is_ge, "less than")
}

#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn less_than<T>(name: &str, value: T, threshold: T) -> Result<T, ArgumentError>
where
    T: PartialOrd + fmt::Display,
{
    bounded(
        name,
        value,
        &threshold,
        Ordering::is_lt,
        "greater than or equal to",
    )
}

#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn less_than_or_equal_to<T>(name: &str, value: T, threshold: T) -> Result<T, ArgumentError>
where
    T: PartialOrd + fmt::Display,
{
    bounded(name, value, &threshold, Ordering::is_le, "greater than")
}
