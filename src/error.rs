//! Error types for the Spendcat library.
//!
//! All errors are represented by the [`SpendcatError`] enum. Most of them are
//! configuration mistakes caught at startup (an empty training corpus, an
//! invalid smoothing constant, an unknown category label in a training file);
//! classifying text never produces one with the built-in analyzer.
//!
//! # Examples
//!
//! ```
//! use spendcat::error::{Result, SpendcatError};
//!
//! fn load() -> Result<()> {
//!     Err(SpendcatError::EmptyCorpus)
//! }
//!
//! match load() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Spendcat operations.
#[derive(Error, Debug)]
pub enum SpendcatError {
    /// I/O errors (reading training data, config files, batch input).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Training was attempted with no examples.
    #[error("Training corpus is empty: a classifier needs at least one example")]
    EmptyCorpus,

    /// Training examples produced no tokens at all.
    #[error("Training corpus has no tokens: every description was empty after analysis")]
    EmptyVocabulary,

    /// The process-wide classifier was queried before it was initialized.
    #[error("Classifier not initialized: call registry::init_default() at startup")]
    NotInitialized,

    /// A category label that is not one of the fixed categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpendcatError.
pub type Result<T> = std::result::Result<T, SpendcatError>;

impl SpendcatError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpendcatError::Analysis(msg.into())
    }

    /// Create a new unknown category error.
    pub fn unknown_category<S: Into<String>>(label: S) -> Self {
        SpendcatError::UnknownCategory(label.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpendcatError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpendcatError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpendcatError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
