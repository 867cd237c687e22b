//! # seqtools
//!
//! Null-safe helper extensions over iterable sequences, plus a recursive,
//! Serde-driven "stringify" debug formatter that renders any sequence of
//! record-like values as a single deterministic, JSON-like line of text.
//!
//! ## Stringify
//!
//! [`stringify`] takes a possibly-absent sequence and renders every non-null
//! element as a brace-delimited field map, joined with `", "`:
//!
//! ```rust
//! use serde::Serialize;
//! use seqtools::stringify;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let users = vec![
//!     Some(User { name: "Alice".to_string(), age: 30 }),
//!     None, // dropped silently
//!     Some(User { name: "Bob".to_string(), age: 25 }),
//! ];
//!
//! let text = stringify(Some(users)).unwrap();
//! assert_eq!(
//!     text,
//!     r#"{ "name": "Alice", "age": 30 }, { "name": "Bob", "age": 25 }"#
//! );
//!
//! // An absent sequence is a legal input, not an error
//! assert_eq!(stringify(None::<Vec<User>>).unwrap(), "");
//! ```
//!
//! Null handling is deliberately asymmetric: null *elements* vanish from the
//! output, while null *field values* inside an element render as the bare
//! token `null`. Nested sequences render as `[...]` (empty ones as `[]`,
//! absent ones as `null`), and nested records recurse. See the [`format`]
//! module for the full format reference, including the deviations from
//! strict JSON.
//!
//! Any `T: serde::Serialize` works as an element type, so deriving
//! `Serialize` is all a type needs; there is no bespoke trait to implement.
//!
//! ## Sequence helpers
//!
//! The [`SequenceExt`] and [`NullableSequenceExt`] traits add the
//! surrounding toolkit: null filtering, partitioning, conditional filtering,
//! indexed iteration, joining, and comparator ordering:
//!
//! ```rust
//! use seqtools::{NullableSequenceExt, SequenceExt};
//!
//! let nums: Vec<i32> = vec![Some(3), None, Some(1), Some(2)].non_nulls().collect();
//! let sorted = nums.sorted_by(|a, b| a.cmp(b));
//! assert_eq!(sorted.join_with(" < "), "1 < 2 < 3");
//!
//! assert!(None::<Vec<i32>>.is_none_or_empty());
//! ```
//!
//! ## Dynamic values
//!
//! When the shape isn't known at compile time, build a [`Value`] tree with
//! the [`value!`] macro and format it the same way:
//!
//! ```rust
//! use seqtools::{to_string, value};
//!
//! let record = value!({
//!     "name": "Alice",
//!     "tags": ["admin", "user"],
//!     "manager": null
//! });
//!
//! assert_eq!(
//!     to_string(&record).unwrap(),
//!     r#"{ "name": "Alice", "tags": ["admin", "user"], "manager": null }"#
//! );
//! ```
//!
//! ## Caveats
//!
//! - Formatting is a plain recursive descent with **no cycle detection**;
//!   input object graphs must be acyclic. Opt in to a bound with
//!   [`StringifyOptions::with_max_depth`] when that cannot be guaranteed.
//! - String content is written **verbatim** between quotes by default, so
//!   embedded `"` characters produce output that is not valid JSON. Opt in
//!   to escaping with [`StringifyOptions::escaped`].

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod seq;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::FieldMap;
pub use options::StringifyOptions;
pub use seq::{EnsureSeq, FilterIf, NonNulls, NullableSequenceExt, SequenceExt};
pub use ser::{Serializer, ValueSerializer};
pub use value::{Number, Value};

use serde::Serialize;

/// Renders every non-null element of a possibly-absent sequence, joined with
/// `", "`.
///
/// An absent sequence (`None`) renders as the empty string; so does a
/// sequence with no non-null elements. Null elements are dropped without a
/// placeholder; null values *inside* an element render as `null`.
///
/// # Examples
///
/// ```rust
/// use seqtools::stringify;
///
/// assert_eq!(stringify(None::<Vec<i32>>).unwrap(), "");
/// assert_eq!(stringify(Some(vec![1, 2, 3])).unwrap(), "1, 2, 3");
/// assert_eq!(stringify(Some(vec![Some(1), None, Some(2)])).unwrap(), "1, 2");
/// ```
///
/// # Errors
///
/// Returns an error only for inputs outside the supported data model (e.g.
/// maps with non-string keys) or when a configured depth limit is exceeded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify<I>(sequence: Option<I>) -> Result<String>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    stringify_with_options(sequence, StringifyOptions::default())
}

/// Like [`stringify`], with custom [`StringifyOptions`].
///
/// # Errors
///
/// Returns an error only for inputs outside the supported data model or when
/// the configured depth limit is exceeded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_with_options<I>(sequence: Option<I>, options: StringifyOptions) -> Result<String>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let Some(sequence) = sequence else {
        return Ok(String::new());
    };

    let mut fragments: Vec<Option<String>> = Vec::new();
    for element in sequence {
        let text = to_string_with_options(&element, options.clone())?;
        // A bare null fragment is a null element: dropped, no placeholder.
        fragments.push((text != "null").then_some(text));
    }
    Ok(fragments.non_nulls().join_with(", "))
}

/// Renders a single value in the stringify debug format.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use seqtools::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, r#"{ "x": 1, "y": 2 }"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g. a map with
/// non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, StringifyOptions::default())
}

/// Like [`to_string`], with custom [`StringifyOptions`].
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the configured
/// depth limit is exceeded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: StringifyOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Converts any `T: Serialize` to a dynamic [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use seqtools::{to_value, Value};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_record());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Method-style access to [`stringify`] on any iterable sequence.
///
/// For a possibly-absent sequence (`Option<I>`), call the free function
/// [`stringify`] instead; calling this method on an `Option` would format
/// the inner collection as a single nested element.
pub trait Stringify: IntoIterator + Sized
where
    Self::Item: Serialize,
{
    /// Renders this sequence with [`stringify`].
    ///
    /// # Errors
    ///
    /// See [`stringify`].
    fn stringify(self) -> Result<String> {
        crate::stringify(Some(self))
    }

    /// Renders this sequence with [`stringify_with_options`].
    ///
    /// # Errors
    ///
    /// See [`stringify_with_options`].
    fn stringify_with_options(self, options: StringifyOptions) -> Result<String> {
        crate::stringify_with_options(Some(self), options)
    }
}

impl<I> Stringify for I
where
    I: IntoIterator,
    I::Item: Serialize,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_to_string_point() {
        let point = Point { x: 1, y: 2 };
        assert_eq!(to_string(&point).unwrap(), r#"{ "x": 1, "y": 2 }"#);
    }

    #[test]
    fn test_to_string_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        assert_eq!(
            to_string(&user).unwrap(),
            r#"{ "id": 123, "name": "Alice", "active": true, "tags": ["admin", "user"] }"#
        );
    }

    #[test]
    fn test_stringify_absent_is_empty() {
        assert_eq!(stringify(None::<Vec<Point>>).unwrap(), "");
    }

    #[test]
    fn test_stringify_drops_null_elements() {
        let points = vec![Some(Point { x: 1, y: 2 }), None, Some(Point { x: 3, y: 4 })];
        assert_eq!(
            stringify(Some(points)).unwrap(),
            r#"{ "x": 1, "y": 2 }, { "x": 3, "y": 4 }"#
        );
    }

    #[test]
    fn test_stringify_method_form() {
        let points = vec![Point { x: 1, y: 2 }];
        assert_eq!(points.stringify().unwrap(), r#"{ "x": 1, "y": 2 }"#);
    }

    #[test]
    fn test_to_value_preserves_field_order() {
        let user = User {
            id: 1,
            name: "a".to_string(),
            active: false,
            tags: vec![],
        };

        let value = to_value(&user).unwrap();
        let record = value.as_record().expect("expected a record");
        let names: Vec<_> = record.keys().cloned().collect();
        assert_eq!(names, vec!["id", "name", "active", "tags"]);
    }
}
