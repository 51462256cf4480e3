//! # Spendcat
//!
//! A transaction category classifier for personal-finance tracking.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Multinomial Naive Bayes with Laplace smoothing, scored in log space
//! - Built-in training corpus covering ten spending and income categories
//! - Text analysis pipeline shared by training and classification
//! - Immutable, thread-safe trained models with an explicit process-wide handle

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::classifier::{
        Category, CategoryClassifier, NaiveBayesClassifier, NaiveBayesConfig, TrainingExample,
        TransactionInput,
    };
    pub use crate::error::{Result, SpendcatError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
