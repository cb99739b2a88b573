//! `cast`, `cast_ref`, `cast_box`, `not_null_and_cast`.

use super::common::{assert_accepted, assert_rejected, NAME};
use argument::{cast, cast_box, cast_ref, not_null_and_cast, AnyValue, FailureKind};

#[derive(Debug, PartialEq)]
struct Widget {
    id: u32,
}

#[test]
fn object_that_is_not_a_string_is_type_failure() {
    let object = Widget { id: 1 };
    let error = assert_rejected(cast::<String>(NAME, Some(&object)), FailureKind::Type, NAME);
    assert_eq!(error.actual_value(), Some("Widget { id: 1 }"));
    assert!(error.message().contains("alloc::string::String"));
}

#[test]
fn string_casts_to_string() {
    let text = String::from("abc");
    let checked = cast::<String>(NAME, Some(&text)).unwrap().unwrap();
    assert!(std::ptr::eq(checked, &text));
    assert_eq!(checked, "abc");
}

#[test]
fn absent_value_passes_cast() {
    assert_accepted(cast::<String>(NAME, None), &None);
}

#[test]
fn absent_value_fails_not_null_and_cast() {
    assert_rejected(not_null_and_cast::<String>(NAME, None), FailureKind::Null, NAME);
}

#[test]
fn not_null_and_cast_narrows_present_values() {
    let widget = Widget { id: 7 };
    let checked = not_null_and_cast::<Widget>(NAME, Some(&widget)).unwrap();
    assert!(std::ptr::eq(checked, &widget));

    assert_rejected(
        not_null_and_cast::<u64>(NAME, Some(&widget)),
        FailureKind::Type,
        NAME,
    );
}

#[test]
fn numeric_types_do_not_coerce() {
    let value: &dyn AnyValue = &1_i32;
    assert_rejected(cast_ref::<i64>(NAME, value), FailureKind::Type, NAME);
    assert_rejected(cast_ref::<u32>(NAME, value), FailureKind::Type, NAME);
    assert_accepted(cast_ref::<i32>(NAME, value), &&1);
}

#[test]
fn heterogeneous_values_narrow_individually() {
    let values: Vec<Box<dyn AnyValue>> = vec![
        Box::new(1_u8),
        Box::new(String::from("two")),
        Box::new(Widget { id: 3 }),
    ];
    let strings: Vec<&String> = values
        .iter()
        .filter_map(|value| cast_ref::<String>(NAME, &**value).ok())
        .collect();
    assert_eq!(strings, [&String::from("two")]);
}

#[test]
fn cast_box_takes_ownership() {
    let boxed: Box<dyn AnyValue> = Box::new(Widget { id: 9 });
    let widget = cast_box::<Widget>(NAME, boxed).unwrap();
    assert_eq!(*widget, Widget { id: 9 });
}

#[test]
fn cast_box_reports_rendered_value() {
    let boxed: Box<dyn AnyValue> = Box::new(vec![1, 2, 3]);
    let error = assert_rejected(cast_box::<String>(NAME, boxed), FailureKind::Type, NAME);
    assert_eq!(
        error.message(),
        "Value \"[1, 2, 3]\" is not of type \"alloc::string::String\"."
    );
}

#[test]
fn boxed_values_passed_by_reference_narrow_their_payload() {
    let boxed: Box<dyn AnyValue> = Box::new(String::from("abc"));
    assert_eq!(cast_ref::<String>(NAME, &boxed).unwrap(), "abc");
    assert_eq!(cast::<String>(NAME, Some(&boxed)).unwrap().unwrap(), "abc");
    assert_eq!(not_null_and_cast::<String>(NAME, Some(&boxed)).unwrap(), "abc");

    let error = assert_rejected(cast_ref::<Widget>(NAME, &boxed), FailureKind::Type, NAME);
    assert_eq!(
        error.message(),
        format!("Value \"abc\" is not of type \"{}\".", std::any::type_name::<Widget>())
    );
}
