/// Builds a [`Value`](crate::Value) from a literal representation.
///
/// Records map to [`Value::Record`](crate::Value) with fields kept in the
/// written order, arrays to [`Value::Array`](crate::Value). Expressions
/// (including parenthesized variables) are converted with
/// [`Value::from`](crate::Value), so a `chrono` date becomes
/// [`Value::Date`](crate::Value).
///
/// # Examples
///
/// ```rust
/// use seqtools::{value, Value};
///
/// let record = value!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["admin", "user"],
///     "manager": null
/// });
///
/// assert!(record.is_record());
/// ```
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    // Handle empty record
    ({}) => {
        $crate::Value::Record($crate::FieldMap::new())
    };

    // Handle non-empty record
    ({ $($key:literal : $val:tt),* $(,)? }) => {{
        let mut record = $crate::FieldMap::new();
        $(
            record.insert($key.to_string(), $crate::value!($val));
        )*
        $crate::Value::Record(record)
    }};

    // Fallback for any other expression
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{FieldMap, Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));

        let arr = value!([1, 2, 3]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::Number(Number::Integer(2)));
                assert_eq!(vec[2], Value::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_value_macro_records() {
        assert_eq!(value!({}), Value::Record(FieldMap::new()));

        let record = value!({
            "name": "Alice",
            "age": 30
        });

        match record {
            Value::Record(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(
                    fields.get("name"),
                    Some(&Value::String("Alice".to_string()))
                );
                assert_eq!(fields.get("age"), Some(&Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected record"),
        }
    }

    #[test]
    fn test_value_macro_preserves_field_order() {
        let record = value!({
            "zeta": 1,
            "alpha": 2,
            "mid": 3
        });

        let names: Vec<_> = match &record {
            Value::Record(fields) => fields.keys().cloned().collect(),
            _ => panic!("Expected record"),
        };
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
