//! Error types for the rtfhtml library.

use std::io;
use thiserror::Error;

/// Result type alias for rtfhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The upstream parser rejected the input.
    #[error("RTF parsing error: {0}")]
    Parse(String),

    /// The document tree could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised while computing styles or walking the tree.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The document template failed to produce output.
    #[error("Template error: {0}")]
    Template(String),

    /// A render option holds an unusable value.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Check if this error came from the upstream parser.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}
