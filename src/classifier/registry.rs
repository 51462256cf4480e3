//! Process-wide access to the active classifier.
//!
//! A [`ClassifierRegistry`] holds the model that answers classification
//! requests. Installing a model swaps an `Arc` under a short write lock;
//! callers that already hold the previous `Arc` keep using it, so retraining
//! never touches a model that is being read.
//!
//! The global registry starts empty. A host application calls
//! [`init_default`] once during startup, after which
//! [`classify_transaction`] can be used from any thread:
//!
//! ```
//! use spendcat::classifier::registry::{self, TransactionInput};
//! use spendcat::classifier::Category;
//!
//! registry::init_default().unwrap();
//!
//! let input = TransactionInput::new("Weekly shop").with_description("grocery delivery");
//! assert_eq!(registry::classify_transaction(&input).unwrap(), Category::Food);
//! ```

use std::sync::Arc;

use lazy_static::lazy_static;
use log::info;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpendcatError};

use super::category::Category;
use super::naive_bayes::NaiveBayesClassifier;

/// Holder of the active classifier.
#[derive(Debug, Default)]
pub struct ClassifierRegistry {
    active: RwLock<Option<Arc<NaiveBayesClassifier>>>,
}

impl ClassifierRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `classifier` the active model and return the previous one.
    pub fn install(&self, classifier: NaiveBayesClassifier) -> Option<Arc<NaiveBayesClassifier>> {
        let classifier = Arc::new(classifier);
        info!(
            "installing classifier: {} documents, {} categories, vocabulary {}",
            classifier.total_documents(),
            classifier.categories().len(),
            classifier.vocabulary_size()
        );
        self.active.write().replace(classifier)
    }

    /// Install `classifier` unless a model is already active.
    ///
    /// Returns the model that is active afterwards.
    pub fn install_if_empty<F>(&self, build: F) -> Result<Arc<NaiveBayesClassifier>>
    where
        F: FnOnce() -> Result<NaiveBayesClassifier>,
    {
        if let Some(active) = self.active.read().as_ref() {
            return Ok(Arc::clone(active));
        }

        let mut guard = self.active.write();
        if let Some(active) = guard.as_ref() {
            return Ok(Arc::clone(active));
        }

        let classifier = Arc::new(build()?);
        info!(
            "initialized classifier: {} documents, {} categories, vocabulary {}",
            classifier.total_documents(),
            classifier.categories().len(),
            classifier.vocabulary_size()
        );
        *guard = Some(Arc::clone(&classifier));
        Ok(classifier)
    }

    /// The active classifier.
    pub fn current(&self) -> Result<Arc<NaiveBayesClassifier>> {
        self.active
            .read()
            .as_ref()
            .map(Arc::clone)
            .ok_or(SpendcatError::NotInitialized)
    }

    /// Whether a classifier has been installed.
    pub fn is_initialized(&self) -> bool {
        self.active.read().is_some()
    }

    /// Classify `text` with the active classifier.
    pub fn classify(&self, text: &str) -> Result<Category> {
        self.current()?.classify(text)
    }
}

lazy_static! {
    static ref GLOBAL_REGISTRY: ClassifierRegistry = ClassifierRegistry::new();
}

/// The process-wide registry.
pub fn global() -> &'static ClassifierRegistry {
    &GLOBAL_REGISTRY
}

/// Train on the built-in corpus and install the result globally.
///
/// Safe to call more than once: later calls return the model that is
/// already active without retraining.
pub fn init_default() -> Result<Arc<NaiveBayesClassifier>> {
    global().install_if_empty(NaiveBayesClassifier::train_default)
}

/// The fields of a new transaction that matter for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Required short title.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
}

impl TransactionInput {
    /// Create an input with only a title.
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The text to classify: the description when it is present and
    /// non-empty, the title otherwise.
    pub fn classification_text(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => &self.title,
        }
    }
}

/// Classify a new transaction with the global classifier.
pub fn classify_transaction(input: &TransactionInput) -> Result<Category> {
    global().classify(input.classification_text())
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::classifier::config::NaiveBayesConfig;
    use crate::classifier::types::TrainingExample;

    #[test]
    fn test_empty_registry() {
        let registry = ClassifierRegistry::new();

        assert!(!registry.is_initialized());
        assert!(matches!(
            registry.current(),
            Err(SpendcatError::NotInitialized)
        ));
        assert!(matches!(
            registry.classify("coffee shop"),
            Err(SpendcatError::NotInitialized)
        ));
    }

    #[test]
    fn test_install_swaps_model() {
        let registry = ClassifierRegistry::new();
        assert!(registry
            .install(NaiveBayesClassifier::train_default().unwrap())
            .is_none());
        let before = registry.current().unwrap();
        assert_eq!(registry.classify("coffee shop").unwrap(), Category::Food);

        let retrained = NaiveBayesClassifier::train(
            &[TrainingExample::new("coffee shop", Category::Other)],
            NaiveBayesConfig::default(),
        )
        .unwrap();
        let previous = registry.install(retrained).unwrap();

        assert!(Arc::ptr_eq(&previous, &before));
        assert_eq!(registry.classify("coffee shop").unwrap(), Category::Other);
        // Readers holding the old model are unaffected.
        assert_eq!(before.classify("coffee shop").unwrap(), Category::Food);
    }

    #[test]
    fn test_install_if_empty_builds_once() {
        let registry = ClassifierRegistry::new();
        let first = registry
            .install_if_empty(NaiveBayesClassifier::train_default)
            .unwrap();
        let second = registry
            .install_if_empty(|| panic!("must not retrain"))
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_install_if_empty_propagates_errors() {
        let registry = ClassifierRegistry::new();
        let result = registry.install_if_empty(|| Err(SpendcatError::EmptyCorpus));

        assert!(matches!(result, Err(SpendcatError::EmptyCorpus)));
        assert!(!registry.is_initialized());
    }

    #[test]
    fn test_concurrent_classification() {
        let registry = Arc::new(ClassifierRegistry::new());
        registry.install(NaiveBayesClassifier::train_default().unwrap());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    (0..50)
                        .map(|_| registry.classify("monthly salary payment").unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            let results = handle.join().unwrap();
            assert!(results.iter().all(|&c| c == Category::Salary));
        }
    }

    #[test]
    fn test_classification_text_fallback() {
        let title_only = TransactionInput::new("Taxi fare");
        assert_eq!(title_only.classification_text(), "Taxi fare");

        let empty_description = TransactionInput::new("Taxi fare").with_description("");
        assert_eq!(empty_description.classification_text(), "Taxi fare");

        let with_description =
            TransactionInput::new("March").with_description("electricity bill");
        assert_eq!(with_description.classification_text(), "electricity bill");
    }

    #[test]
    fn test_transaction_input_deserializes_without_description() {
        let input: TransactionInput = serde_json::from_str(r#"{"title": "bus ticket"}"#).unwrap();
        assert_eq!(input, TransactionInput::new("bus ticket"));
    }

    #[test]
    fn test_global_classify_transaction() {
        init_default().unwrap();
        assert!(global().is_initialized());

        let input = TransactionInput::new("paycheck deposit");
        assert_eq!(classify_transaction(&input).unwrap(), Category::Salary);
    }
}
