#![no_main]

use argument::{cast, cast_ref, AnyValue, FailureKind};
use libfuzzer_sys::fuzz_target;

/// Fuzz target for the cast checks.
///
/// Whatever the payload, narrowing to its own type succeeds with the same
/// value and narrowing to any other type fails with a type mismatch.
fuzz_target!(|input: (i64, String, bool)| {
    let (int, text, flag) = input;
    let values: [&dyn AnyValue; 3] = [&int, &text, &flag];

    for value in values {
        let as_int = cast_ref::<i64>("v", value);
        let as_text = cast_ref::<String>("v", value);
        let as_flag = cast_ref::<bool>("v", value);

        // INVARIANT: exactly one target type matches
        let matches = [as_int.is_ok(), as_text.is_ok(), as_flag.is_ok()];
        assert_eq!(matches.iter().filter(|&&ok| ok).count(), 1);

        for error in [as_int.err(), as_text.err(), as_flag.err()].into_iter().flatten() {
            assert_eq!(error.kind(), FailureKind::Type);
            let _ = error.to_string();
        }
    }

    assert_eq!(cast_ref::<String>("v", &text).map(String::as_str), Ok(text.as_str()));
    // INVARIANT: an absent value passes the optional cast
    assert_eq!(cast::<i64>("v", None), Ok(None));
});
