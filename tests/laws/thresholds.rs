//! Threshold and sign laws.

use argument::{
    greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, positive_non_zero,
    positive_or_zero, FailureKind,
};
use proptest::prelude::*;

// ============================================================================
// ORACLES
// ============================================================================

/// Which of the four threshold checks should pass for `value` vs `threshold`.
fn oracle<T: PartialOrd>(value: &T, threshold: &T) -> [bool; 4] {
    [
        value > threshold,
        value >= threshold,
        value < threshold,
        value <= threshold,
    ]
}

fn actual<T: PartialOrd + std::fmt::Display + Copy>(value: T, threshold: T) -> [bool; 4] {
    [
        greater_than("n", value, threshold).is_ok(),
        greater_than_or_equal_to("n", value, threshold).is_ok(),
        less_than("n", value, threshold).is_ok(),
        less_than_or_equal_to("n", value, threshold).is_ok(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: each threshold check agrees with the native operator.
    #[test]
    fn prop_integer_thresholds_match_operators(value in any::<i64>(), threshold in any::<i64>()) {
        prop_assert_eq!(actual(value, threshold), oracle(&value, &threshold));
    }

    /// Property: the same holds for floats, NaN included (NaN fails all four).
    #[test]
    fn prop_float_thresholds_match_operators(value in any::<f64>(), threshold in any::<f64>()) {
        prop_assert_eq!(actual(value, threshold), oracle(&value, &threshold));
    }

    /// Property: at the threshold, only the inclusive checks pass.
    #[test]
    fn prop_boundary_inclusion(threshold in any::<i32>()) {
        prop_assert_eq!(actual(threshold, threshold), [false, true, false, true]);
    }

    /// Property: a passing threshold check returns the value it was given.
    #[test]
    fn prop_success_returns_value(value in any::<i64>(), threshold in any::<i64>()) {
        prop_assume!(value > threshold);
        prop_assert_eq!(greater_than("n", value, threshold), Ok(value));
        prop_assert_eq!(less_than("n", threshold, value), Ok(threshold));
    }

    /// Property: failures are always `OutOfRange` and carry the value.
    #[test]
    fn prop_failure_carries_value(value in any::<i64>(), threshold in any::<i64>()) {
        prop_assume!(value <= threshold);
        let error = greater_than("n", value, threshold).unwrap_err();
        prop_assert_eq!(error.kind(), FailureKind::OutOfRange);
        let shown = value.to_string();
        prop_assert_eq!(error.actual_value(), Some(shown.as_str()));
        let suffix = format!("{}.", threshold);
        prop_assert!(error.message().ends_with(&suffix));
    }

    /// Property: sign checks agree with comparisons against zero.
    #[test]
    fn prop_sign_checks_match_zero_comparison(value in any::<i64>()) {
        prop_assert_eq!(positive_or_zero("n", value).is_ok(), value >= 0);
        prop_assert_eq!(positive_non_zero("n", value).is_ok(), value > 0);
    }

    /// Property: positive_non_zero is positive_or_zero minus the single value 0.
    #[test]
    fn prop_sign_checks_differ_only_at_zero(value in any::<i32>()) {
        let or_zero = positive_or_zero("n", value).is_ok();
        let non_zero = positive_non_zero("n", value).is_ok();
        prop_assert_eq!(or_zero && !non_zero, value == 0);
    }
}
