//! Error types for the Requery library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RequeryError`] enum.
//!
//! Two conditions that look like failures are deliberately *not* errors:
//! a corpus whose vocabulary collapses to nothing after stop-word filtering
//! (projections are simply zero vectors), and a term selection that finds
//! fewer candidates than requested (the query is extended by fewer terms).
//!
//! # Examples
//!
//! ```
//! use requery::error::{RequeryError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RequeryError::invalid_argument("Query text must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Requery operations.
#[derive(Error, Debug)]
pub enum RequeryError {
    /// I/O errors (console, config files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Caller supplied input that can never be valid (empty query, bad weights, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Search provider errors (HTTP transport, API responses)
    #[error("Search error: {0}")]
    Search(String),

    /// Relevance judgment errors
    #[error("Judgment error: {0}")]
    Judgment(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with RequeryError.
pub type Result<T> = std::result::Result<T, RequeryError>;

impl RequeryError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RequeryError::InvalidArgument(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RequeryError::Analysis(msg.into())
    }

    /// Create a new search error.
    pub fn search<S: Into<String>>(msg: S) -> Self {
        RequeryError::Search(msg.into())
    }

    /// Create a new judgment error.
    pub fn judgment<S: Into<String>>(msg: S) -> Self {
        RequeryError::Judgment(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RequeryError::Config(msg.into())
    }
}
