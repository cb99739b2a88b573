// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Emptiness checks for strings and collections.
//!
//! Only types that know their length without being consumed can be checked.
//! That is what [`Countable`] encodes, and it is deliberately not implemented
//! for iterators: asking a single-pass iterator whether it is empty means
//! pulling an element out of it, after which the caller's iteration starts
//! one element short. Collect into a `Vec` first.
//!
//! ```compile_fail
//! let words = "alpha beta".split(' ');
//! let _ = argument::not_empty("words", words);
//! ```

use crate::error::ArgumentError;
use crate::presence::not_null;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A value with a known, side-effect-free element count.
pub trait Countable {
    /// Number of elements (bytes for strings).
    fn element_count(&self) -> usize;

    #[inline]
    fn has_no_elements(&self) -> bool {
        self.element_count() == 0
    }
}

impl Countable for str {
    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl Countable for String {
    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for [T] {
    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Countable for [T; N] {
    #[inline]
    fn element_count(&self) -> usize {
        N
    }
}

macro_rules! countable_by_len {
    ($($ty:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> Countable for $ty<$($param),+> {
                #[inline]
                fn element_count(&self) -> usize {
                    self.len()
                }
            }
        )+
    };
}

countable_by_len!(
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    BinaryHeap<T>,
    BTreeSet<T>,
    BTreeMap<K, V>,
    HashSet<T, S>,
    HashMap<K, V, S>,
);

impl<C: Countable + ?Sized> Countable for &C {
    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

impl<C: Countable + ?Sized> Countable for &mut C {
    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

impl<C: Countable + ?Sized> Countable for Box<C> {
    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

impl<C: Countable + ?Sized> Countable for Rc<C> {
    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

impl<C: Countable + ?Sized> Countable for Arc<C> {
    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

impl<B> Countable for Cow<'_, B>
where
    B: Countable + ToOwned + ?Sized,
{
    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

/// Return `value` if it has at least one element, else fail with
/// [`ArgumentError::Empty`].
#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn not_empty<C: Countable>(name: &str, value: C) -> Result<C, ArgumentError> {
    if value.has_no_elements() {
        return Err(ArgumentError::empty(name));
    }
    Ok(value)
}

/// Absent values fail with [`ArgumentError::Null`], present but empty ones
/// with [`ArgumentError::Empty`].
///
/// ```
/// let tags = vec!["stable"];
/// let checked = argument::not_null_or_empty("tags", Some(&tags)).unwrap();
/// assert!(std::ptr::eq(checked, &tags));
///
/// let err = argument::not_null_or_empty("title", Some("")).unwrap_err();
/// assert_eq!(err.kind(), argument::FailureKind::Empty);
/// ```
#[inline]
#[must_use = "the checked value is returned; an ignored result skips the check"]
pub fn not_null_or_empty<C: Countable>(name: &str, value: Option<C>) -> Result<C, ArgumentError> {
    not_empty(name, not_null(name, value)?)
}
