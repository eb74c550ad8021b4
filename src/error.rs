//! Error types for data URI parsing and Serde adapters.
//!
//! ## Error Categories
//!
//! - **Malformed locators**: the text does not follow the `data:` grammar.
//!   These carry the line and column where scanning gave up.
//! - **Invalid payloads**: the grammar matched but the base64 segment does not decode
//! - **File access**: [`DataUri::from_file`](crate::DataUri::from_file) could not read its source
//! - **I/O Errors**: stream reading failures
//!
//! Scalar value construction and comparison never fail, so nothing in here
//! belongs to [`ScalarValue`](crate::ScalarValue).
//!
//! ## Examples
//!
//! ```rust
//! use serde_datauri::{DataUri, Error};
//!
//! let result = DataUri::parse("not-a-uri");
//! assert!(matches!(result, Err(Error::MalformedLocator { .. })));
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input does not match the data URI grammar
    #[error("Invalid data URI at line {line}, column {col}: {msg}")]
    MalformedLocator { line: usize, col: usize, msg: String },

    /// The grammar matched but the payload is not valid base64
    #[error("Invalid data URI payload: {0}")]
    InvalidPayloadEncoding(String),

    /// A file-backed data URI could not read its source
    #[error("Cannot read {path}: {reason}")]
    FileNotAccessible { path: String, reason: String },

    /// IO error during reading
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed locator error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datauri::Error;
    ///
    /// let err = Error::malformed(1, 6, "missing `;base64,` marker");
    /// assert!(err.to_string().contains("column 6"));
    /// ```
    pub fn malformed(line: usize, col: usize, msg: &str) -> Self {
        Error::MalformedLocator {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid payload error from the underlying decoder message.
    pub fn invalid_payload<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidPayloadEncoding(msg.to_string())
    }

    /// Creates a file access error for `path`.
    pub fn file_not_accessible(path: &str, reason: &str) -> Self {
        Error::FileNotAccessible {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datauri::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for stream reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors caused by the text itself rather than by I/O.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(
            self,
            Error::MalformedLocator { .. } | Error::InvalidPayloadEncoding(_)
        )
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
