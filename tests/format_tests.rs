//! End-to-end checks of the rendered text for dynamically built records,
//! including date rendering and the top-level null-drop rule.

use chrono::{TimeZone, Utc};
use serde::Serialize;
use seqtools::{stringify, to_string, value, Value};

#[test]
fn test_family_scenario() {
    let dob = Utc.with_ymd_and_hms(1990, 5, 1, 8, 30, 0).unwrap();

    let parent = value!({
        "Name": "My Name is 0",
        "Age": 0,
        "Dob": (dob),
        "Classes": [
            { "Name": "child 1", "Age": 1, "Dob": null, "Classes": null },
            { "Name": "child 2", "Age": 2, "Dob": null, "Classes": null }
        ]
    });

    let rendered = stringify(Some(vec![Some(parent.clone()), None])).unwrap();

    let expected = format!(
        "{{ \"Name\": \"My Name is 0\", \"Age\": 0, \"Dob\": {dob}, \"Classes\": \
         [{{ \"Name\": \"child 1\", \"Age\": 1, \"Dob\": null, \"Classes\": null }}, \
         {{ \"Name\": \"child 2\", \"Age\": 2, \"Dob\": null, \"Classes\": null }}] }}"
    );
    assert_eq!(rendered, expected);

    // The trailing null element contributed nothing at all.
    assert_eq!(rendered, stringify(Some(vec![Some(parent)])).unwrap());
}

#[test]
fn test_date_value_renders_bare() {
    let dob = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(to_string(&Value::Date(dob)).unwrap(), dob.to_string());
}

#[test]
fn test_derived_date_field_renders_quoted() {
    // A chrono date inside a derived struct goes through serde as a plain
    // string, so it is quoted like any other text.
    #[derive(Serialize)]
    struct Event {
        dob: chrono::DateTime<Utc>,
    }

    let event = Event {
        dob: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
    };

    let text = to_string(&event).unwrap();
    assert!(text.starts_with(r#"{ "dob": "2020-01-01T"#));
    assert!(text.ends_with(r#"" }"#));
}

#[test]
fn test_record_fields_keep_written_order() {
    let record = value!({
        "zeta": 1,
        "alpha": 2,
        "beta": 3
    });

    assert_eq!(
        to_string(&record).unwrap(),
        r#"{ "zeta": 1, "alpha": 2, "beta": 3 }"#
    );
}

#[test]
fn test_value_display_matches_to_string() {
    let record = value!({
        "name": "Alice",
        "tags": ["a", "b"],
        "boss": null
    });

    assert_eq!(record.to_string(), to_string(&record).unwrap());
}

#[test]
fn test_nested_arrays_of_scalars() {
    let record = value!({
        "grid": [[1, 2], [3, 4], []]
    });

    assert_eq!(
        to_string(&record).unwrap(),
        r#"{ "grid": [[1, 2], [3, 4], []] }"#
    );
}

#[test]
fn test_null_value_element_is_dropped() {
    let elements = vec![value!({ "id": 1 }), Value::Null, value!({ "id": 2 })];
    assert_eq!(
        stringify(Some(elements)).unwrap(),
        r#"{ "id": 1 }, { "id": 2 }"#
    );
}
