#![no_main]

use argument::{
    greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, positive_non_zero,
    positive_or_zero, FailureKind,
};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    int: i64,
    int_threshold: i64,
    float: f64,
    float_threshold: f64,
}

fn check_all<T>(value: T, threshold: T)
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    let outcomes = [
        (greater_than("v", value, threshold), value > threshold),
        (greater_than_or_equal_to("v", value, threshold), value >= threshold),
        (less_than("v", value, threshold), value < threshold),
        (less_than_or_equal_to("v", value, threshold), value <= threshold),
    ];
    for (result, expected) in outcomes {
        // INVARIANT: each check agrees with its operator, NaN included
        assert_eq!(result.is_ok(), expected);
        if let Err(error) = result {
            assert_eq!(error.kind(), FailureKind::OutOfRange);
            assert_eq!(error.actual_value(), Some(value.to_string().as_str()));
        }
    }
}

/// Fuzz target for the sign and threshold checks.
fuzz_target!(|input: Input| {
    check_all(input.int, input.int_threshold);
    check_all(input.float, input.float_threshold);

    // INVARIANT: sign checks agree with comparison against zero
    assert_eq!(positive_or_zero("v", input.int).is_ok(), input.int >= 0);
    assert_eq!(positive_non_zero("v", input.int).is_ok(), input.int > 0);
});
