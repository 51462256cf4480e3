//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: the
//! tokenizer produces them from normalized text, token filters transform or
//! drop them, and the classifier finally consumes only their `text`.
//!
//! # Examples
//!
//! ```
//! use spendcat::analysis::token::Token;
//!
//! let token = Token::with_offsets("coffee", 0, 0, 6);
//! assert_eq!(token.text, "coffee");
//! assert_eq!(token.end_offset, 6);
//! assert!(!token.is_stopped());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// Offsets are byte offsets into the text the tokenizer saw, i.e. after all
/// char filters have run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the normalized text
    pub start_offset: usize,

    /// The byte offset where this token ends in the normalized text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens, the currency of tokenizers, filters and analyzers.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("salary", 3);
        assert_eq!(token.text, "salary");
        assert_eq!(token.position, 3);
        assert_eq!(token.len(), 6);
        assert!(!token.is_empty());
        assert!(!token.is_stopped());
    }

    #[test]
    fn test_token_stop_and_with_text() {
        let token = Token::with_offsets("Taxi", 0, 4, 8).stop();
        assert!(token.is_stopped());

        let renamed = token.with_text("taxi");
        assert_eq!(renamed.text, "taxi");
        assert_eq!(renamed.start_offset, 4);
        assert_eq!(renamed.end_offset, 8);
        assert!(renamed.is_stopped());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new("fare", 0).to_string(), "fare");
    }
}
