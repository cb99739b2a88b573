// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Narrowing dynamically typed arguments to a concrete type.
//!
//! The dynamic argument type is [`AnyValue`]: anything `'static` that can
//! be debug-printed. `Debug` is required so a rejected value can be shown
//! in the failure message.
//!
//! | Function            | Input                     | Absent input          |
//! |---------------------|---------------------------|-----------------------|
//! | `cast`              | `Option<&dyn AnyValue>`   | passes as `Ok(None)`  |
//! | `not_null_and_cast` | `Option<&dyn AnyValue>`   | `Null`                |
//! | `cast_ref`          | `&dyn AnyValue`           | n/a                   |
//! | `cast_box`          | `Box<dyn AnyValue>`       | n/a                   |
//!
//! `Box<dyn AnyValue>` is itself an `AnyValue`, so `&boxed` coerces to a
//! `&dyn AnyValue` whose concrete type is the box. The checks look through
//! such boxes (at any depth) and narrow the payload instead.

use crate::error::ArgumentError;
use crate::presence::not_null;
use std::any::{type_name, Any};
use std::fmt;

/// A dynamically typed argument.
pub trait AnyValue: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Name of the concrete type behind the trait object.
    fn type_name(&self) -> &'static str;
}

impl<T: Any + fmt::Debug> AnyValue for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// The innermost value behind nested `Box<dyn AnyValue>` layers.
fn payload(value: &dyn AnyValue) -> &dyn AnyValue {
    match AnyValue::as_any(value).downcast_ref::<Box<dyn AnyValue>>() {
        Some(inner) => payload(&**inner),
        None => value,
    }
}

// Strings render bare; `Debug` would quote them a second time inside the message.
fn render(value: &dyn AnyValue) -> String {
    let any = AnyValue::as_any(payload(value));
    if let Some(text) = any.downcast_ref::<String>() {
        return text.clone();
    }
    if let Some(text) = any.downcast_ref::<&'static str>() {
        return (*text).to_string();
    }
    format!("{:?}", value)
}

fn mismatch<T: Any>(name: &str, value: &dyn AnyValue) -> ArgumentError {
    ArgumentError::type_mismatch(name, render(value), type_name::<T>())
}

/// Borrow `value` as a `T`, or fail with [`ArgumentError::Type`].
#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn cast_ref<'a, T: Any>(name: &str, value: &'a dyn AnyValue) -> Result<&'a T, ArgumentError> {
    if let Some(direct) = AnyValue::as_any(value).downcast_ref::<T>() {
        return Ok(direct);
    }
    let inner = payload(value);
    AnyValue::as_any(inner)
        .downcast_ref::<T>()
        .ok_or_else(|| mismatch::<T>(name, inner))
}

/// Narrow an optional dynamic argument. An absent value is not a type error
/// and passes through as `Ok(None)`; use [`not_null_and_cast`] to reject it.
///
/// ```
/// use argument::{AnyValue, FailureKind};
///
/// let label = String::from("abc");
/// let value: Option<&dyn AnyValue> = Some(&label);
/// assert_eq!(argument::cast::<String>("label", value), Ok(Some(&label)));
///
/// let count = 3_u8;
/// let err = argument::cast::<String>("label", Some(&count)).unwrap_err();
/// assert_eq!(err.kind(), FailureKind::Type);
///
/// assert_eq!(argument::cast::<String>("label", None), Ok(None));
/// ```
#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn cast<'a, T: Any>(
    name: &str,
    value: Option<&'a dyn AnyValue>,
) -> Result<Option<&'a T>, ArgumentError> {
    value.map(|value| cast_ref::<T>(name, value)).transpose()
}

/// [`not_null`] followed by [`cast_ref`].
#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn not_null_and_cast<'a, T: Any>(
    name: &str,
    value: Option<&'a dyn AnyValue>,
) -> Result<&'a T, ArgumentError> {
    cast_ref::<T>(name, not_null(name, value)?)
}

/// Take ownership of `value` as a `Box<T>`.
///
/// On failure the box is dropped; the error keeps its rendering.
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn cast_box<T: Any>(name: &str, value: Box<dyn AnyValue>) -> Result<Box<T>, ArgumentError> {
    let any = AnyValue::as_any(&*value);
    if !any.is::<T>() {
        if !any.is::<Box<dyn AnyValue>>() {
            return Err(mismatch::<T>(name, &*value));
        }
        return match AnyValue::into_any(value).downcast::<Box<dyn AnyValue>>() {
            Ok(inner) => cast_box::<T>(name, *inner),
            Err(_) => Err(ArgumentError::type_mismatch(name, "<moved>", type_name::<T>())),
        };
    }
    AnyValue::into_any(value)
        .downcast::<T>()
        .map_err(|_| ArgumentError::type_mismatch(name, "<moved>", type_name::<T>()))
}
