//! Error types for textlens.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TextLensError`] enum. The analysis core only ever produces
//! [`TextLensError::EmptyInput`]; the remaining variants come from the
//! command line layer (file access, configuration, output encoding).
//!
//! # Examples
//!
//! ```
//! use textlens::error::{Result, TextLensError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextLensError::config("top_words must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textlens operations.
#[derive(Error, Debug)]
pub enum TextLensError {
    /// I/O errors (reading input, writing the report)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist
    #[error("The file '{0}' was not found")]
    InputNotFound(String),

    /// Tokenization produced no words, so no statistics can be computed
    #[error("No words found in the input text")]
    EmptyInput,

    /// Analysis-related errors (tokenizer construction, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration values or unreadable configuration files
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with TextLensError.
pub type Result<T> = std::result::Result<T, TextLensError>;

impl TextLensError {
    /// Create a new input-not-found error.
    pub fn input_not_found<S: Into<String>>(path: S) -> Self {
        TextLensError::InputNotFound(path.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextLensError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TextLensError::Config(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        TextLensError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextLensError::Other(msg.into())
    }

    /// Whether this error means the input had no words.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, TextLensError::EmptyInput)
    }
}
