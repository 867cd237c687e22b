//! Error types for stringify serialization.
//!
//! The core contract is deliberately error-free: absent input yields an empty
//! string and well-formed acyclic object graphs always format successfully.
//! Errors exist only at the edges of the serde data model:
//!
//! - **Non-string map keys**: the output format writes field names as quoted
//!   text, so map keys must serialize as strings
//! - **Depth limit**: raised only when an explicit limit has been configured
//!   via [`StringifyOptions::with_max_depth`](crate::StringifyOptions::with_max_depth)
//! - **Custom**: messages surfaced by a failing `Serialize` implementation

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while producing stringify
/// output.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A map key serialized as something other than a string.
    #[error("map keys must be strings")]
    NonStringKey,

    /// Nesting exceeded the configured depth limit.
    ///
    /// Only produced when a limit was set explicitly; by default nesting is
    /// unbounded and the caller is responsible for passing acyclic data.
    #[error("nesting depth exceeds the configured limit of {0}")]
    DepthLimit(usize),

    /// Custom error raised by a `Serialize` implementation.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
