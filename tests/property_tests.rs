//! Property-based tests for the stringify invariants: determinism,
//! top-level null transparency, separator placement, and balanced
//! delimiters across generated value trees.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use seqtools::{stringify, to_string, Value};

// String leaves stay alphabetic so the delimiter-counting properties are not
// confused by quotes or braces inside string content.
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
        Just(Value::Date(
            Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap()
        )),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| Value::Record(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_output_is_deterministic(value in value_strategy()) {
        let first = to_string(&value).unwrap();
        let second = to_string(&value).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_null_elements_are_invisible(
        elements in prop::collection::vec(proptest::option::of(value_strategy()), 0..6)
    ) {
        let kept: Vec<Option<Value>> =
            elements.iter().filter(|e| e.is_some()).cloned().collect();

        let with_nulls = stringify(Some(elements)).unwrap();
        let without_nulls = stringify(Some(kept)).unwrap();
        prop_assert_eq!(with_nulls, without_nulls);
    }

    #[test]
    fn prop_scalar_separator_count(numbers in prop::collection::vec(any::<i64>(), 0..20)) {
        let count = numbers.len();
        let text = stringify(Some(numbers)).unwrap();

        prop_assert_eq!(text.matches(", ").count(), count.saturating_sub(1));
        prop_assert!(!text.starts_with(", "));
        prop_assert!(!text.ends_with(", "));
    }

    #[test]
    fn prop_delimiters_balance(value in value_strategy()) {
        let text = to_string(&value).unwrap();

        let opens = text.matches('{').count();
        let closes = text.matches('}').count();
        prop_assert_eq!(opens, closes);

        let brackets_open = text.matches('[').count();
        let brackets_close = text.matches(']').count();
        prop_assert_eq!(brackets_open, brackets_close);
    }

    #[test]
    fn prop_all_null_sequences_render_empty(count in 0usize..8) {
        let nulls: Vec<Option<Value>> = vec![None; count];
        prop_assert_eq!(stringify(Some(nulls)).unwrap(), "");
    }
}
