// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `arg!`: checks that take their name from the checked identifier.

/// Run a check with the identifier itself as the parameter name.
///
/// `arg!(check(ident, extra...))` expands to
/// `argument::check("ident", ident, extra...)`, so renaming the variable
/// renames the failure too.
///
/// ```
/// use argument::{arg, AnyValue, ArgumentError};
///
/// fn resize(width: u32, label: Option<&str>, payload: &dyn AnyValue) -> Result<u32, ArgumentError> {
///     let width = arg!(positive_non_zero(width))?;
///     let width = arg!(less_than_or_equal_to(width, 4096))?;
///     let _label = arg!(not_null_or_white_space(label))?;
///     let _body = arg!(cast_ref::<String>(payload))?;
///     Ok(width)
/// }
///
/// let body = String::from("<svg/>");
/// assert_eq!(resize(640, Some("thumb"), &body), Ok(640));
/// assert_eq!(resize(0, Some("thumb"), &body).unwrap_err().name(), "width");
/// assert_eq!(resize(640, Some(" "), &body).unwrap_err().name(), "label");
/// assert_eq!(resize(640, Some("thumb"), &1_u8).unwrap_err().name(), "payload");
/// ```
#[macro_export]
macro_rules! arg {
    ($check:ident :: < $($ty:ty),+ > ( $value:ident $(, $extra:expr)* $(,)? )) => {
        $crate::$check::<$($ty),+>(::core::stringify!($value), $value $(, $extra)*)
    };
    ($check:ident ( $value:ident $(, $extra:expr)* $(,)? )) => {
        $crate::$check(::core::stringify!($value), $value $(, $extra)*)
    };
}
