//! `not_empty` / `not_null_or_empty` over strings and collections.

use super::common::{assert_accepted, assert_rejected, singletons, NAME};
use argument::{not_empty, not_null_or_empty, FailureKind};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

#[test]
fn empty_string_is_empty() {
    assert_rejected(not_null_or_empty(NAME, Some("")), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, String::new()), FailureKind::Empty, NAME);
}

#[test]
fn non_empty_string_passes() {
    assert_accepted(not_null_or_empty(NAME, Some("abc")), &"abc");
}

#[test]
fn absent_string_is_null() {
    assert_rejected(not_null_or_empty::<&str>(NAME, None), FailureKind::Null, NAME);
}

#[test]
fn absent_collections_are_null() {
    assert_rejected(not_null_or_empty::<&[u8]>(NAME, None), FailureKind::Null, NAME);
    assert_rejected(not_null_or_empty::<Vec<String>>(NAME, None), FailureKind::Null, NAME);
}

#[test]
fn empty_collections_of_any_element_type_are_empty() {
    assert_rejected(not_empty(NAME, Vec::<()>::new()), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, Vec::<String>::new()), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, &[] as &[i32]), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, [0_u8; 0]), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, VecDeque::<u8>::new()), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, LinkedList::<u8>::new()), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, BinaryHeap::<u8>::new()), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, HashSet::<u8>::new()), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, HashMap::<u8, u8>::new()), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, BTreeSet::<u8>::new()), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, BTreeMap::<u8, u8>::new()), FailureKind::Empty, NAME);
}

#[test]
fn smart_pointers_are_checked_through() {
    assert_rejected(not_empty(NAME, Box::<str>::from("")), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, Rc::<[u8]>::from(vec![])), FailureKind::Empty, NAME);
    assert_rejected(not_empty(NAME, Arc::new(Vec::<u8>::new())), FailureKind::Empty, NAME);
    assert_rejected(
        not_empty(NAME, Cow::<[u8]>::Owned(Vec::new())),
        FailureKind::Empty,
        NAME,
    );
    assert!(not_empty(NAME, Cow::Borrowed("x")).is_ok());
}

#[test]
fn one_element_collections_come_back_as_same_instance() {
    let s = singletons();
    assert!(std::ptr::eq(not_empty(NAME, &s.vec).unwrap(), &s.vec));
    assert!(std::ptr::eq(not_empty(NAME, &s.deque).unwrap(), &s.deque));
    assert!(std::ptr::eq(not_empty(NAME, &s.set).unwrap(), &s.set));
    assert!(std::ptr::eq(not_empty(NAME, &s.map).unwrap(), &s.map));
    assert!(std::ptr::eq(not_empty(NAME, &s.array).unwrap(), &s.array));
}

#[test]
fn owned_collection_is_moved_back_unchanged() {
    let items = vec![String::from("a"), String::from("b")];
    let address = items.as_ptr();
    let checked = not_null_or_empty(NAME, Some(items)).unwrap();
    assert_eq!(checked.as_ptr(), address);
    assert_eq!(checked, ["a", "b"]);
}

#[test]
fn iterator_must_be_collected_first() {
    // Iterators are not `Countable`; collecting is the supported path.
    let evens: Vec<u32> = (0..10).filter(|n| n % 2 == 0).collect();
    assert_eq!(not_empty(NAME, evens).unwrap().len(), 5);
}
