//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split (already normalized) text into tokens. They are the
//! middle step of a [`PipelineAnalyzer`](crate::analysis::analyzer::PipelineAnalyzer):
//! char filters run before them and token filters after.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on runs of Unicode whitespace
//!
//! # Examples
//!
//! ```
//! use spendcat::analysis::tokenizer::Tokenizer;
//! use spendcat::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("taxi  fare").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve concurrent
/// classification calls.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use spendcat::analysis::token::{Token, TokenStream};
/// use spendcat::analysis::tokenizer::Tokenizer;
/// use spendcat::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
