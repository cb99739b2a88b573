#![no_main]

use argument::{not_null_or_empty, not_null_or_white_space, FailureKind};
use libfuzzer_sys::fuzz_target;

/// Fuzz target for the string checks.
///
/// Arbitrary names and values must never panic, and every outcome must
/// agree with the plain `str` predicates.
fuzz_target!(|input: (&str, Option<&str>)| {
    let (name, value) = input;

    match not_null_or_white_space(name, value) {
        Ok(checked) => {
            // INVARIANT: a passing value is returned untouched
            assert_eq!(Some(checked), value);
            assert!(checked.chars().any(|c| !c.is_whitespace()));
        }
        Err(error) => {
            // INVARIANT: the name is reported verbatim
            assert_eq!(error.name(), name);
            let expected = match value {
                None => FailureKind::Null,
                Some("") => FailureKind::Empty,
                Some(_) => FailureKind::WhiteSpace,
            };
            assert_eq!(error.kind(), expected);
            let _ = error.to_string();
        }
    }

    // INVARIANT: emptiness agrees with str::is_empty
    let empty = value.map(str::is_empty);
    match not_null_or_empty(name, value) {
        Ok(_) => assert_eq!(empty, Some(false)),
        Err(error) if value.is_none() => assert_eq!(error.kind(), FailureKind::Null),
        Err(error) => {
            assert_eq!(empty, Some(true));
            assert_eq!(error.kind(), FailureKind::Empty);
        }
    }
});
