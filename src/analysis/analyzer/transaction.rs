//! Analyzer for transaction descriptions.
//!
//! # Pipeline
//!
//! 1. LowercaseCharFilter (whole text)
//! 2. PatternReplaceCharFilter (delete everything but ASCII word characters and whitespace)
//! 3. WhitespaceTokenizer
//! 4. RemoveEmptyFilter
//!
//! Punctuation is deleted rather than turned into a separator, so `"don't"`
//! becomes the single token `"dont"` and `"e-mail"` becomes `"email"`.
//!
//! # Examples
//!
//! ```
//! use spendcat::analysis::analyzer::{Analyzer, TransactionAnalyzer};
//!
//! let analyzer = TransactionAnalyzer::new().unwrap();
//! assert_eq!(
//!     analyzer.terms("Uber ride -- $23.50, tip incl.").unwrap(),
//!     vec!["uber", "ride", "2350", "tip", "incl"]
//! );
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// The analyzer used for both training descriptions and classified text.
#[derive(Clone, Debug)]
pub struct TransactionAnalyzer {
    inner: PipelineAnalyzer,
}

impl TransactionAnalyzer {
    /// Create a new transaction analyzer.
    pub fn new() -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::strip_non_word()?))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("transaction");

        Ok(TransactionAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for TransactionAnalyzer {
    fn default() -> Self {
        Self::new().expect("Transaction analyzer should be creatable with default settings")
    }
}

impl Analyzer for TransactionAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "transaction"
    }
}

/// Tokenize text the way the classifier does.
///
/// Lowercases, deletes every character that is not an ASCII word character
/// or whitespace, splits on whitespace and drops empty tokens.
pub fn tokenize(text: &str) -> Result<Vec<String>> {
    TransactionAnalyzer::new()?.terms(text)
}
