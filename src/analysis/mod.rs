//! Text analysis module for Spendcat.
//!
//! This module turns free-text transaction descriptions into the token
//! sequences the classifier counts. It is organized as a small analysis
//! pipeline: char filters normalize the raw text, a tokenizer splits it and
//! token filters clean up the resulting stream.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, TransactionAnalyzer, tokenize};
pub use char_filter::CharFilter;
pub use token::{Token, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;
