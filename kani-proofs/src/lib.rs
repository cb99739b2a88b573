// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the argument range checks.
//!
//! This standalone crate mirrors the decision logic of the sign and
//! threshold checks and proves it over every machine integer using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Agreement**: each check accepts exactly when its operator holds
//! 2. **Boundary inclusion**: only the inclusive checks accept the threshold
//! 3. **Sign split**: `positive_non_zero` rejects exactly what
//!    `positive_or_zero` rejects plus zero, with the matching reason

use std::cmp::Ordering;

/// Why a range check rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Negative,
    Zero,
    Threshold(Check),
}

/// The four threshold checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
}

impl Check {
    pub const ALL: [Check; 4] = [
        Check::GreaterThan,
        Check::GreaterThanOrEqualTo,
        Check::LessThan,
        Check::LessThanOrEqualTo,
    ];

    /// Whether a comparison result passes (mirrors src/range.rs).
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Check::GreaterThan => ordering.is_gt(),
            Check::GreaterThanOrEqualTo => ordering.is_ge(),
            Check::LessThan => ordering.is_lt(),
            Check::LessThanOrEqualTo => ordering.is_le(),
        }
    }
}

// ============================================================================
// DECISION LOGIC (mirrors src/range.rs)
// ============================================================================

pub fn threshold<T: PartialOrd>(check: Check, value: T, threshold: T) -> Result<T, Rejection> {
    match value.partial_cmp(&threshold) {
        Some(ordering) if check.accepts(ordering) => Ok(value),
        _ => Err(Rejection::Threshold(check)),
    }
}

pub fn positive_or_zero(value: i64) -> Result<i64, Rejection> {
    if value < 0 {
        return Err(Rejection::Negative);
    }
    Ok(value)
}

pub fn positive_non_zero(value: i64) -> Result<i64, Rejection> {
    if value < 0 {
        return Err(Rejection::Negative);
    }
    if value == 0 {
        return Err(Rejection::Zero);
    }
    Ok(value)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    #[kani::proof]
    fn verify_integer_thresholds_match_operators() {
        let value: i64 = kani::any();
        let bound: i64 = kani::any();

        kani::assert(
            threshold(Check::GreaterThan, value, bound).is_ok() == (value > bound),
            "greater_than must agree with >",
        );
        kani::assert(
            threshold(Check::GreaterThanOrEqualTo, value, bound).is_ok() == (value >= bound),
            "greater_than_or_equal_to must agree with >=",
        );
        kani::assert(
            threshold(Check::LessThan, value, bound).is_ok() == (value < bound),
            "less_than must agree with <",
        );
        kani::assert(
            threshold(Check::LessThanOrEqualTo, value, bound).is_ok() == (value <= bound),
            "less_than_or_equal_to must agree with <=",
        );
    }

    #[kani::proof]
    fn verify_success_returns_value() {
        let value: i32 = kani::any();
        let bound: i32 = kani::any();
        for check in Check::ALL {
            if let Ok(returned) = threshold(check, value, bound) {
                kani::assert(returned == value, "a passing check returns its input");
            }
        }
    }

    #[kani::proof]
    fn verify_boundary_inclusion() {
        let bound: i64 = kani::any();
        kani::assert(threshold(Check::GreaterThan, bound, bound).is_err(), "> excludes bound");
        kani::assert(threshold(Check::GreaterThanOrEqualTo, bound, bound).is_ok(), ">= includes bound");
        kani::assert(threshold(Check::LessThan, bound, bound).is_err(), "< excludes bound");
        kani::assert(threshold(Check::LessThanOrEqualTo, bound, bound).is_ok(), "<= includes bound");
    }

    #[kani::proof]
    fn verify_nan_fails_every_check() {
        let bound: f32 = kani::any();
        for check in Check::ALL {
            kani::assert(threshold(check, f32::NAN, bound).is_err(), "NaN value is rejected");
            kani::assert(threshold(check, bound, f32::NAN).is_err(), "NaN threshold rejects");
        }
    }

    #[kani::proof]
    fn verify_sign_split() {
        let value: i64 = kani::any();
        match (positive_or_zero(value), positive_non_zero(value)) {
            (Ok(_), Ok(_)) => kani::assert(value > 0, "both pass only above zero"),
            (Ok(_), Err(reason)) => {
                kani::assert(value == 0, "only zero separates the checks");
                kani::assert(reason == Rejection::Zero, "zero is reported as zero");
            }
            (Err(a), Err(b)) => {
                kani::assert(value < 0, "both fail only below zero");
                kani::assert(a == Rejection::Negative && b == Rejection::Negative, "negative reason");
            }
            (Err(_), Ok(_)) => kani::assert(false, "positive_non_zero is stricter"),
        }
    }
}
