//! Analyzer implementations that combine char filters, tokenizers and filters.

mod analyzer;
mod pipeline;
mod transaction;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use transaction::{TransactionAnalyzer, tokenize};
