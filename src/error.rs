//! Error types for the topic-bayes library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TopicBayesError`] enum. Every error is fatal for the operation that
//! produced it: there are no retries and no partial results.
//!
//! # Examples
//!
//! ```
//! use topic_bayes::error::{Result, TopicBayesError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TopicBayesError::format("line 1: expected at least 2 tab-separated fields"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for topic-bayes operations.
#[derive(Error, Debug)]
pub enum TopicBayesError {
    /// I/O errors from readers that are not tied to a file path.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A corpus file could not be opened or read.
    #[error("Load error: cannot read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed corpus input (bad header, header without body, ...).
    #[error("Format error: {0}")]
    Format(String),

    /// Internal consistency failure between the topic counts and the documents.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Predictions and documents handed to the evaluator differ in length.
    #[error("Size mismatch: {predictions} predictions for {documents} documents")]
    SizeMismatch { predictions: usize, documents: usize },

    /// Invalid configuration or argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TopicBayesError.
pub type Result<T> = std::result::Result<T, TopicBayesError>;

impl TopicBayesError {
    /// Create a new load error for `path`.
    pub fn load<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        TopicBayesError::Load {
            path: path.into(),
            source,
        }
    }

    /// Create a new format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        TopicBayesError::Format(msg.into())
    }

    /// Create a new format error tagged with a 1-based line number.
    pub fn format_at<S: Into<String>>(line: usize, msg: S) -> Self {
        TopicBayesError::Format(format!("line {}: {}", line, msg.into()))
    }

    /// Create a new invariant violation error.
    pub fn invariant<S: Into<String>>(msg: S) -> Self {
        TopicBayesError::InvariantViolation(msg.into())
    }

    /// Create a new size mismatch error.
    pub fn size_mismatch(predictions: usize, documents: usize) -> Self {
        TopicBayesError::SizeMismatch {
            predictions,
            documents,
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TopicBayesError::InvalidArgument(msg.into())
    }
}
