//! Common types for transaction classification.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A labeled transaction description used for training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Free-text description.
    pub description: String,
    /// Category label.
    pub category: Category,
}

impl TrainingExample {
    /// Create a new training example.
    pub fn new<S: Into<String>>(description: S, category: Category) -> Self {
        Self {
            description: description.into(),
            category,
        }
    }
}

/// Per-category training statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// The category.
    pub category: Category,
    /// Number of training documents labeled with it.
    pub documents: usize,
    /// Total number of tokens across those documents.
    pub tokens: usize,
    /// Number of distinct tokens seen in those documents.
    pub distinct_tokens: usize,
}

/// Summary of a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    /// Total number of training documents.
    pub total_documents: usize,
    /// Number of distinct tokens across all categories.
    pub vocabulary_size: usize,
    /// Additive smoothing constant.
    pub smoothing: f64,
    /// Label returned when no category scores above negative infinity.
    pub fallback: Category,
    /// Categories in registration order.
    pub categories: Vec<CategoryStats>,
}
