//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and return a new
//! stream. They run in the order they were added to the analyzer.
//!
//! # Available Filters
//!
//! - [`remove_empty::RemoveEmptyFilter`] - Removes empty and stopped tokens
//!
//! # Filter Chaining
//!
//! ```text
//! Char filters → Tokenizer → Filter 1 → ... → Filter N → Classifier
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use spendcat::analysis::token::{Token, TokenStream};
/// use spendcat::analysis::token_filter::Filter;
/// use spendcat::error::Result;
///
/// struct DropDigitsFilter;
///
/// impl Filter for DropDigitsFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let kept: Vec<Token> = tokens
///             .filter(|t| !t.text.chars().all(|c| c.is_ascii_digit()))
///             .collect();
///         Ok(Box::new(kept.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "drop_digits"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod remove_empty;
