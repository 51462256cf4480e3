//! Transaction category classification.
//!
//! This module assigns one of a fixed set of [`Category`] labels to a
//! free-text transaction description, using a multinomial Naive Bayes model
//! trained on a small built-in corpus.
//!
//! # Architecture
//!
//! - `CategoryClassifier` trait: Common interface for classifiers
//! - `NaiveBayesTrainer`: Accumulates word statistics from labeled examples
//! - `NaiveBayesClassifier`: Immutable trained model, log-domain scoring
//! - `ClassifierRegistry`: Process-wide handle to the active model
//! - `TrainingExample`: Training data structure
//!
//! # Example
//!
//! ```
//! use spendcat::classifier::{Category, NaiveBayesClassifier, NaiveBayesConfig, TrainingExample};
//!
//! # fn main() -> spendcat::error::Result<()> {
//! let examples = vec![
//!     TrainingExample::new("grocery store purchase", Category::Food),
//!     TrainingExample::new("uber ride", Category::Transportation),
//! ];
//!
//! let classifier = NaiveBayesClassifier::train(&examples, NaiveBayesConfig::default())?;
//! assert_eq!(classifier.classify("late uber ride home")?, Category::Transportation);
//! # Ok(())
//! # }
//! ```

mod category;
mod classifier;
mod config;
pub mod corpus;
mod naive_bayes;
pub mod registry;
mod types;

// Public exports
pub use category::Category;
pub use classifier::CategoryClassifier;
pub use config::NaiveBayesConfig;
pub use corpus::{TRAINING_CORPUS, default_training_examples, load_training_data};
pub use naive_bayes::{NaiveBayesClassifier, NaiveBayesTrainer};
pub use registry::{ClassifierRegistry, TransactionInput, classify_transaction, init_default};
pub use types::{CategoryStats, ModelStats, TrainingExample};
