//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline used by the
//! classifier, for training descriptions and for queried text alike:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Classifier
//!             ↓
//!         Char filters
//!             ↓
//!         Tokenizer
//!             ↓
//!         Token filters
//! ```
//!
//! # Examples
//!
//! ```
//! use spendcat::analysis::analyzer::{Analyzer, TransactionAnalyzer};
//!
//! let analyzer = TransactionAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Coffee Shop!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "coffee");
//! assert_eq!(tokens[1].text, "shop");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync`: a trained classifier shares its
/// analyzer with every concurrent caller.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Analyze the given text and keep only the token texts.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
