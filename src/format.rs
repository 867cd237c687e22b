//! Output format reference.
//!
//! This module documents the stringify debug format produced by
//! [`stringify`](crate::stringify) and [`to_string`](crate::to_string).
//! The format is JSON-like but tuned for human-readable debug dumps, not for
//! machine parsing; the deviations from strict JSON are deliberate and listed
//! below.
//!
//! # Top level
//!
//! A call formats a *sequence* of elements. Each non-null element renders
//! independently and the results are joined with `", "`:
//!
//! ```text
//! { "name": "a", "age": 1 }, { "name": "b", "age": 2 }
//! ```
//!
//! - An absent sequence (`None`) renders as the empty string
//! - An empty sequence renders as the empty string
//! - Null elements are dropped silently: no placeholder, no leftover
//!   separator. `[e1, null, e2]` renders exactly like `[e1, e2]`
//!
//! # Records
//!
//! A record (struct, string-keyed map, or [`Value::Record`](crate::Value))
//! renders as a brace-delimited field list:
//!
//! ```text
//! { "field1": value1, "field2": value2 }
//! ```
//!
//! - One space inside each brace, `", "` between entries, none trailing
//! - Field names are double-quoted and followed by `: `
//! - Fields appear in declared order (structs) or insertion order (maps and
//!   dynamic records); nothing is sorted
//! - A record with no fields renders as `{  }`
//!
//! # Sequences as values
//!
//! A sequence appearing *inside* an element renders as a bracket-delimited
//! list with `", "` between items:
//!
//! ```text
//! "children": [{ "name": "a" }, { "name": "b" }]
//! ```
//!
//! - An empty (but present) sequence renders as `[]`
//! - An absent sequence-valued field renders as `null`, not `[]`
//!
//! # Nulls
//!
//! Null handling is deliberately asymmetric:
//!
//! - **Top level**: null elements disappear from the output entirely
//! - **Inside an element**: a null field value renders as the bare token
//!   `null`
//!
//! Both rules are part of the contract; neither is an accident of
//! implementation.
//!
//! # Scalars
//!
//! | value kind                  | rendering                                |
//! |-----------------------------|------------------------------------------|
//! | string                      | `"..."`, content verbatim by default     |
//! | char                        | bare character, unquoted                 |
//! | integer, float, bool        | default display form, unquoted           |
//! | [`Value::Date`](crate::Value) | default display form, unquoted         |
//! | null / unit                 | `null`                                   |
//!
//! Only values that are strings in the serde data model are quoted. A
//! `chrono` date inside a derived struct serializes as a string and is
//! therefore quoted; [`Value::Date`](crate::Value) is the way to render a
//! date bare.
//!
//! # Known limitations
//!
//! - **Embedded quotes are not escaped by default.** A string value
//!   containing `"` yields output that a JSON parser rejects. This matches
//!   the format's debug-dump heritage; enable
//!   [`StringifyOptions::escaped`](crate::StringifyOptions::escaped) for
//!   backslash-escaped output.
//! - **No cycle detection.** Formatting is a plain recursive descent, so a
//!   self-referential object graph does not terminate: the input must be
//!   acyclic. Violations exhaust the stack rather than producing a clean
//!   error. Callers that cannot guarantee acyclic input should set
//!   [`StringifyOptions::with_max_depth`](crate::StringifyOptions::with_max_depth),
//!   which bounds the recursion and fails with a defined error instead.
//!
//! # Determinism
//!
//! Output is a pure function of the input value: the same immutable input
//! always produces byte-identical output, and separate calls share no state.
