//! Configuration options for stringify output.
//!
//! The output format itself is fixed; the options cover the two places where
//! a caller may want stricter behavior than the defaults:
//!
//! - [`StringifyOptions::with_escaped_strings`]: by default, string values
//!   are written between double quotes with their content untouched, so a
//!   string containing `"` produces output that is not machine-parseable.
//!   Enabling escaping upgrades strings to backslash-escaped form.
//! - [`StringifyOptions::with_max_depth`]: by default, nesting is unbounded
//!   and a cyclic object graph recurses until the stack overflows. Setting a
//!   limit turns runaway nesting into [`Error::DepthLimit`](crate::Error).
//!
//! ## Examples
//!
//! ```rust
//! use seqtools::{to_string_with_options, StringifyOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Quote { text: String }
//!
//! let quote = Quote { text: "she said \"hi\"".to_string() };
//!
//! let plain = to_string_with_options(&quote, StringifyOptions::new()).unwrap();
//! assert_eq!(plain, r#"{ "text": "she said "hi"" }"#);
//!
//! let escaped = to_string_with_options(&quote, StringifyOptions::escaped()).unwrap();
//! assert_eq!(escaped, r#"{ "text": "she said \"hi\"" }"#);
//! ```

/// Configuration options for stringify serialization.
#[derive(Clone, Debug)]
pub struct StringifyOptions {
    /// Backslash-escape quotes, backslashes, and control characters inside
    /// string values and field names. Off by default.
    pub escape_strings: bool,
    /// Maximum container nesting depth, or `None` for unbounded.
    pub max_depth: Option<usize>,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        StringifyOptions {
            escape_strings: false,
            max_depth: None,
        }
    }
}

impl StringifyOptions {
    /// Creates default options: verbatim string content, unbounded nesting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with string escaping enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::StringifyOptions;
    ///
    /// let options = StringifyOptions::escaped();
    /// assert!(options.escape_strings);
    /// ```
    #[must_use]
    pub fn escaped() -> Self {
        StringifyOptions {
            escape_strings: true,
            ..Default::default()
        }
    }

    /// Sets whether string content is backslash-escaped.
    #[must_use]
    pub fn with_escaped_strings(mut self, escape: bool) -> Self {
        self.escape_strings = escape;
        self
    }

    /// Sets the maximum container nesting depth.
    ///
    /// Serialization fails once more than `depth` nested arrays, records, or
    /// maps are open at the same time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::StringifyOptions;
    ///
    /// let options = StringifyOptions::new().with_max_depth(32);
    /// assert_eq!(options.max_depth, Some(32));
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
