//! Char filters that normalize text before tokenization.
//!
//! Char filters see the whole input string and return a rewritten one. They
//! run in the order they were added to a pipeline, so
//! `[LowercaseCharFilter, PatternReplaceCharFilter]` lowercases first and
//! strips afterwards.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware lowercasing of the whole text
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use spendcat::analysis::char_filter::CharFilter;
//! use spendcat::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
//! assert_eq!(filter.filter("e-book"), "ebook");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
