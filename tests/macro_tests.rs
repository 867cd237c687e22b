use chrono::{TimeZone, Utc};
use seqtools::{to_string, value, FieldMap, Number, Value};

#[test]
fn test_macro_primitives() {
    assert_eq!(value!(null), Value::Null);
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
    assert_eq!(value!(7), Value::Number(Number::Integer(7)));
    assert_eq!(value!(1.25), Value::Number(Number::Float(1.25)));
    assert_eq!(value!("text"), Value::String("text".to_string()));
}

#[test]
fn test_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));

    let arr = value!([1, "two", null, true]);
    let items = arr.as_array().expect("expected an array");
    assert_eq!(items.len(), 4);
    assert_eq!(items[0], Value::Number(Number::Integer(1)));
    assert_eq!(items[1], Value::String("two".to_string()));
    assert_eq!(items[2], Value::Null);
    assert_eq!(items[3], Value::Bool(true));
}

#[test]
fn test_macro_records() {
    assert_eq!(value!({}), Value::Record(FieldMap::new()));

    let record = value!({
        "name": "Alice",
        "age": 30,
    });

    let fields = record.as_record().expect("expected a record");
    assert_eq!(fields.len(), 2);
    assert_eq!(
        fields.get("name"),
        Some(&Value::String("Alice".to_string()))
    );
    assert_eq!(fields.get("age"), Some(&Value::Number(Number::Integer(30))));
}

#[test]
fn test_macro_nesting() {
    let record = value!({
        "items": [{ "id": 1 }, { "id": 2 }],
        "empty": [],
        "none": null
    });

    assert_eq!(
        to_string(&record).unwrap(),
        r#"{ "items": [{ "id": 1 }, { "id": 2 }], "empty": [], "none": null }"#
    );
}

#[test]
fn test_macro_expression_interpolation() {
    let name = String::from("Ada");
    let age = 36i64;

    let record = value!({
        "name": (name),
        "age": (age)
    });

    let fields = record.as_record().expect("expected a record");
    assert_eq!(fields.get("name"), Some(&Value::String("Ada".to_string())));
    assert_eq!(fields.get("age"), Some(&Value::Number(Number::Integer(36))));
}

#[test]
fn test_macro_date_expression() {
    let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let record = value!({ "created": (dt) });

    let fields = record.as_record().expect("expected a record");
    assert_eq!(fields.get("created"), Some(&Value::Date(dt)));
}

#[test]
fn test_macro_trailing_commas() {
    let arr = value!([1, 2, 3,]);
    assert_eq!(arr.as_array().map(Vec::len), Some(3));

    let record = value!({ "a": 1, "b": 2, });
    assert_eq!(record.as_record().map(FieldMap::len), Some(2));
}
