//! Error types for flattening.
//!
//! ## Error Categories
//!
//! - **Invalid input**: the value handed to a traversal is a scalar, not a map or array
//! - **Not an object**: the Text API decoded something other than a JSON object
//! - **Unknown style**: a separator style name could not be parsed
//! - **JSON errors**: decode/encode failures, surfaced exactly as `serde_json` reports them
//! - **I/O errors**: reader/writer failures in the streaming helpers
//!
//! A failed call never returns a partially flattened result.
//!
//! ## Examples
//!
//! ```rust
//! use flatten_keys::{flatten_all, Error, Style, Value};
//!
//! let result = flatten_all(&Value::from("bare"), "", Style::Dot, false);
//! assert!(matches!(result, Err(Error::InvalidInputKind("string"))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while flattening.
#[derive(Debug, Error)]
pub enum Error {
    /// The traversal was handed something other than a map or an array.
    #[error("not a valid input: expected map or array, found {0}")]
    InvalidInputKind(&'static str),

    /// Text input decoded to a value that is not an object.
    #[error("nested text must decode to an object, found {0}")]
    NotAnObject(&'static str),

    /// Separator style name not recognised.
    #[error("unknown separator style {0:?}: expected one of dot, slash, rails")]
    UnknownStyle(String),

    /// Decode or encode failure from the JSON collaborator.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatten_keys::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
