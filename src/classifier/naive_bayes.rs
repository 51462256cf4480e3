//! Multinomial Naive Bayes classifier with additive smoothing.
//!
//! Scores are computed in the log domain: for a category `C` and the tokens
//! `t1..tn` of a description,
//!
//! ```text
//! score(C) = ln(docs(C) / N) + Σ ln((count(ti, C) + a) / (tokens(C) + a·|V|))
//! ```
//!
//! where `N` is the number of training documents, `|V|` the vocabulary size
//! and `a` the smoothing constant (`1.0`, Laplace, by default). The highest
//! score wins; on an exact tie the category registered first during training
//! is kept.
//!
//! Training happens in a [`NaiveBayesTrainer`], which only accumulates.
//! [`NaiveBayesTrainer::finish`] consumes it into an immutable
//! [`NaiveBayesClassifier`], so a model can never be queried half-trained
//! and never changes once built.

use std::fmt;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, TransactionAnalyzer};
use crate::error::{Result, SpendcatError};

use super::category::Category;
use super::classifier::CategoryClassifier;
use super::config::NaiveBayesConfig;
use super::corpus::default_training_examples;
use super::types::{CategoryStats, ModelStats, TrainingExample};

/// Word statistics of one category.
#[derive(Debug, Clone, Default)]
struct CategoryModel {
    /// Training documents labeled with the category.
    documents: usize,
    /// Sum of all values in `frequencies`.
    tokens: usize,
    /// Token -> occurrence count.
    frequencies: AHashMap<String, usize>,
}

/// Accumulates training statistics for a [`NaiveBayesClassifier`].
///
/// Every call to [`train`](Self::train) or [`add_example`](Self::add_example)
/// adds to what was seen before; nothing is reset. Build the classifier with
/// [`finish`](Self::finish) once all examples are in.
pub struct NaiveBayesTrainer {
    analyzer: Arc<dyn Analyzer>,
    config: NaiveBayesConfig,
    categories: Vec<Category>,
    models: AHashMap<Category, CategoryModel>,
    total_documents: usize,
    vocabulary: AHashSet<String>,
}

impl fmt::Debug for NaiveBayesTrainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveBayesTrainer")
            .field("categories", &self.categories)
            .field("total_documents", &self.total_documents)
            .field("vocabulary_size", &self.vocabulary.len())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl NaiveBayesTrainer {
    /// Create an empty trainer using the transaction analyzer.
    pub fn new(config: NaiveBayesConfig) -> Result<Self> {
        Self::with_analyzer(config, Arc::new(TransactionAnalyzer::new()?))
    }

    /// Create an empty trainer with a specific analyzer.
    ///
    /// The same analyzer is handed to the finished classifier, so training
    /// and classification always tokenize alike.
    pub fn with_analyzer(config: NaiveBayesConfig, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            analyzer,
            config,
            categories: Vec::new(),
            models: AHashMap::new(),
            total_documents: 0,
            vocabulary: AHashSet::new(),
        })
    }

    /// Add one labeled description.
    pub fn add_example(&mut self, description: &str, category: Category) -> Result<()> {
        let tokens = self.analyzer.terms(description)?;

        if !self.models.contains_key(&category) {
            self.categories.push(category);
        }
        let model = self.models.entry(category).or_default();
        model.documents += 1;
        model.tokens += tokens.len();

        for token in tokens {
            if !self.vocabulary.contains(&token) {
                self.vocabulary.insert(token.clone());
            }
            *model.frequencies.entry(token).or_insert(0) += 1;
        }

        self.total_documents += 1;
        Ok(())
    }

    /// Add a sequence of labeled descriptions, in order.
    pub fn train<'a, I>(&mut self, examples: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a TrainingExample>,
    {
        for example in examples {
            self.add_example(&example.description, example.category)?;
        }
        Ok(())
    }

    /// Number of documents added so far.
    pub fn total_documents(&self) -> usize {
        self.total_documents
    }

    /// Freeze the accumulated statistics into a classifier.
    ///
    /// Fails with [`SpendcatError::EmptyCorpus`] when no example was added
    /// and with [`SpendcatError::EmptyVocabulary`] when no description
    /// produced a single token.
    pub fn finish(self) -> Result<NaiveBayesClassifier> {
        if self.total_documents == 0 {
            return Err(SpendcatError::EmptyCorpus);
        }
        if self.vocabulary.is_empty() {
            return Err(SpendcatError::EmptyVocabulary);
        }

        debug!(
            "trained naive bayes model: {} documents, {} categories, {} distinct tokens",
            self.total_documents,
            self.categories.len(),
            self.vocabulary.len()
        );
        for category in &self.categories {
            if let Some(model) = self.models.get(category) {
                debug!(
                    "  {category}: {} documents, {} tokens",
                    model.documents, model.tokens
                );
            }
        }

        Ok(NaiveBayesClassifier {
            analyzer: self.analyzer,
            config: self.config,
            categories: self.categories,
            models: self.models,
            total_documents: self.total_documents,
            vocabulary: self.vocabulary,
        })
    }
}

/// A trained, immutable Naive Bayes transaction classifier.
///
/// All queries take `&self` and nothing is mutated after construction, so one
/// instance can be shared through an `Arc` by any number of threads.
pub struct NaiveBayesClassifier {
    analyzer: Arc<dyn Analyzer>,
    config: NaiveBayesConfig,
    categories: Vec<Category>,
    models: AHashMap<Category, CategoryModel>,
    total_documents: usize,
    vocabulary: AHashSet<String>,
}

impl fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("categories", &self.categories)
            .field("total_documents", &self.total_documents)
            .field("vocabulary_size", &self.vocabulary.len())
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl NaiveBayesClassifier {
    /// Train a classifier on `examples` in one step.
    pub fn train(examples: &[TrainingExample], config: NaiveBayesConfig) -> Result<Self> {
        let mut trainer = NaiveBayesTrainer::new(config)?;
        trainer.train(examples)?;
        trainer.finish()
    }

    /// Train a classifier on the built-in corpus with the default config.
    pub fn train_default() -> Result<Self> {
        Self::train(&default_training_examples(), NaiveBayesConfig::default())
    }

    /// Classify a description.
    ///
    /// Text without any token (empty, whitespace, punctuation only) falls
    /// back to the category with the highest prior.
    pub fn classify(&self, text: &str) -> Result<Category> {
        let tokens = self.analyzer.terms(text)?;
        Ok(self.classify_tokens(&tokens))
    }

    /// Classify an already tokenized description.
    pub fn classify_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Category {
        let scores = self.categories.iter().map(|&category| {
            let mut score = self.log_prior(category);
            for token in tokens {
                score += self.log_likelihood(token.as_ref(), category);
            }
            (category, score)
        });

        select_best(self.config.fallback, scores)
    }

    /// Classify many descriptions in parallel, preserving input order.
    pub fn classify_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Category>> {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }

    /// `ln(docs(C) / N)`; negative infinity for a category without documents.
    pub fn log_prior(&self, category: Category) -> f64 {
        let documents = self.document_count(category);
        (documents as f64 / self.total_documents as f64).ln()
    }

    /// Smoothed `ln P(token | category)`.
    ///
    /// Finite for every token and category, including tokens outside the
    /// vocabulary and categories never seen in training.
    pub fn log_likelihood(&self, token: &str, category: Category) -> f64 {
        let smoothing = self.config.smoothing;
        let count = self.word_count(category, token) as f64;
        let denominator =
            self.token_count(category) as f64 + smoothing * self.vocabulary.len() as f64;

        ((count + smoothing) / denominator).ln()
    }

    /// Categories in the order they were first seen during training.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of training documents.
    pub fn total_documents(&self) -> usize {
        self.total_documents
    }

    /// Number of training documents labeled `category`.
    pub fn document_count(&self, category: Category) -> usize {
        self.models.get(&category).map_or(0, |m| m.documents)
    }

    /// Total number of training tokens labeled `category`.
    pub fn token_count(&self, category: Category) -> usize {
        self.models.get(&category).map_or(0, |m| m.tokens)
    }

    /// How often `token` occurred in descriptions labeled `category`.
    pub fn word_count(&self, category: Category, token: &str) -> usize {
        self.models
            .get(&category)
            .and_then(|m| m.frequencies.get(token))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct tokens across the whole corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether `token` appeared anywhere in the training corpus.
    pub fn contains_token(&self, token: &str) -> bool {
        self.vocabulary.contains(token)
    }

    /// The configuration the model was trained with.
    pub fn config(&self) -> &NaiveBayesConfig {
        &self.config
    }

    /// The analyzer shared by training and classification.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Summarize the trained model.
    pub fn stats(&self) -> ModelStats {
        let categories = self
            .categories
            .iter()
            .map(|&category| {
                let model = self.models.get(&category);
                CategoryStats {
                    category,
                    documents: model.map_or(0, |m| m.documents),
                    tokens: model.map_or(0, |m| m.tokens),
                    distinct_tokens: model.map_or(0, |m| m.frequencies.len()),
                }
            })
            .collect();

        ModelStats {
            total_documents: self.total_documents,
            vocabulary_size: self.vocabulary.len(),
            smoothing: self.config.smoothing,
            fallback: self.config.fallback,
            categories,
        }
    }
}

impl CategoryClassifier for NaiveBayesClassifier {
    fn classify(&self, text: &str) -> Result<Category> {
        NaiveBayesClassifier::classify(self, text)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}

/// Pick the category with the strictly highest score.
///
/// Starts from `fallback` at negative infinity, so a later category must
/// exceed the current best to replace it: ties keep the earlier one and an
/// all `-inf` input returns `fallback`.
fn select_best<I>(fallback: Category, scores: I) -> Category
where
    I: IntoIterator<Item = (Category, f64)>,
{
    let mut best_category = fallback;
    let mut best_score = f64::NEG_INFINITY;

    for (category, score) in scores {
        if score > best_score {
            best_score = score;
            best_category = category;
        }
    }

    best_category
}
