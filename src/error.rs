//! Error types for the Wordsmith library.
//!
//! All errors are represented by the [`WordsmithError`] enum. The matching
//! algorithm itself never fails; errors come from loading and validating
//! synonym tables, from I/O in the interactive prompt, and from the CLI.
//!
//! # Examples
//!
//! ```
//! use wordsmith::error::{WordsmithError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordsmithError::table("duplicate term 'use'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordsmith operations.
#[derive(Error, Debug)]
pub enum WordsmithError {
    /// I/O errors (table files, console prompts)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Synonym table invariant violations
    #[error("Table error: {0}")]
    Table(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordsmithError.
pub type Result<T> = std::result::Result<T, WordsmithError>;

impl WordsmithError {
    /// Create a new table error.
    pub fn table<S: Into<String>>(msg: S) -> Self {
        WordsmithError::Table(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordsmithError::InvalidArgument(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        WordsmithError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordsmithError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordsmithError::table("duplicate term 'use'");
        assert_eq!(error.to_string(), "Table error: duplicate term 'use'");

        let error = WordsmithError::invalid_argument("no text");
        assert_eq!(error.to_string(), "Invalid argument: no text");

        let error = WordsmithError::invalid_operation("file exists");
        assert_eq!(error.to_string(), "Invalid operation: file exists");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WordsmithError::from(io_error);

        match error {
            WordsmithError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let error = WordsmithError::from(json_error);
        assert!(matches!(error, WordsmithError::Json(_)));
    }
}
