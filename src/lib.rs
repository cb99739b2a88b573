// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Argument precondition checks.
//!
//! Every check takes the parameter name and the value, and either hands the
//! value back unchanged or returns an [`ArgumentError`] naming the parameter.
//! Because the value comes back, a check reads as an expression at the top of
//! the guarded function:
//!
//! ```
//! use argument::ArgumentError;
//!
//! fn paginate(items: &[u32], page_size: usize) -> Result<usize, ArgumentError> {
//!     let items = argument::not_empty("items", items)?;
//!     let page_size = argument::positive_non_zero("page_size", page_size)?;
//!     Ok(items.len().div_ceil(page_size))
//! }
//!
//! assert_eq!(paginate(&[1, 2, 3], 2), Ok(2));
//! assert_eq!(paginate(&[], 2).unwrap_err().name(), "items");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  ┌──────────────┐  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐
//! │ presence.rs │  │ emptiness.rs │  │   text.rs   │  │   cast.rs   │  │  range.rs   │
//! │  not_null   │─▶│ not_empty    │─▶│ not_white_  │  │ cast, cast_ │  │ sign and    │
//! │             │  │ (Countable)  │  │ space       │  │ ref, _box   │  │ thresholds  │
//! └─────────────┘  └──────────────┘  └─────────────┘  └─────────────┘  └─────────────┘
//!        │                │                 │                │                │
//!        ▼                ▼                 ▼                ▼                ▼
//! ┌──────────────────────────────────────────────────────────────────────────────────┐
//! │                       error.rs  (ArgumentError, FailureKind)                     │
//! └──────────────────────────────────────────────────────────────────────────────────┘
//!        ▲                                                    ▲
//! ┌─────────────┐                                      ┌─────────────┐
//! │  macros.rs  │  arg!(check(ident, ..))              │contracts.rs │  require, or_panic
//! └─────────────┘                                      └─────────────┘
//! ```
//!
//! # Checks
//!
//! | Function                   | Fails with                         |
//! |----------------------------|------------------------------------|
//! | `not_null`                 | `Null`                             |
//! | `not_empty`                | `Empty`                            |
//! | `not_null_or_empty`        | `Null`, `Empty`                    |
//! | `not_white_space`          | `Empty`, `WhiteSpace`              |
//! | `not_null_or_white_space`  | `Null`, `Empty`, `WhiteSpace`      |
//! | `cast`, `cast_ref`, `cast_box` | `Type`                         |
//! | `not_null_and_cast`        | `Null`, `Type`                     |
//! | `positive_or_zero`         | `OutOfRange`                       |
//! | `positive_non_zero`        | `OutOfRange`                       |
//! | `greater_than` and friends | `OutOfRange`                       |
//!
//! # Writing your own checks
//!
//! There is nothing to register. Write a function with the same shape,
//! `fn(&str, T) -> Result<T, ArgumentError>`, build its failure with one of
//! the `ArgumentError` constructors ([`ArgumentError::invalid`] when no
//! specific variant fits), and chain it with `?` or `and_then`.
//!
//! Checks share no state, so they can be called from any number of threads.

mod cast;
pub mod contracts;
mod emptiness;
mod error;
mod macros;
mod presence;
mod range;
mod text;

pub mod testing;

pub use cast::{cast, cast_box, cast_ref, not_null_and_cast, AnyValue};
pub use emptiness::{not_empty, not_null_or_empty, Countable};
pub use error::{ArgumentError, FailureKind};
pub use presence::not_null;
pub use range::{
    greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, positive_non_zero,
    positive_or_zero, Integer,
};
pub use text::{not_null_or_white_space, not_white_space};
