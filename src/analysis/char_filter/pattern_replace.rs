//! Regex replacement char filter implementation.

use regex::Regex;

use super::CharFilter;
use crate::error::{Result, SpendcatError};

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Pattern matching everything that is neither an ASCII word character
    /// nor whitespace.
    pub const NON_WORD_PATTERN: &'static str = r"[^0-9A-Za-z_\s]";

    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| SpendcatError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that deletes punctuation and symbols, keeping ASCII
    /// word characters and whitespace.
    pub fn strip_non_word() -> Result<Self> {
        Self::new(Self::NON_WORD_PATTERN, "")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"(\d+)", "NUM").unwrap();
        assert_eq!(filter.filter("Invoice 2024"), "Invoice NUM");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
        assert_eq!(filter.filter("123-456-789"), "123456789");
    }

    #[test]
    fn test_strip_non_word() {
        let filter = PatternReplaceCharFilter::strip_non_word().unwrap();
        assert_eq!(filter.filter("don't pay $5.00!"), "dont pay 500");
        assert_eq!(filter.filter("snake_case\tand\nlines"), "snake_case\tand\nlines");
        assert_eq!(filter.filter("café"), "caf");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PatternReplaceCharFilter::new(r"[unclosed", "");
        assert!(matches!(result, Err(SpendcatError::Analysis(_))));
    }
}
