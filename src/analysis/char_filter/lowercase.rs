//! Lowercase char filter implementation.

use super::CharFilter;

/// A char filter that lowercases the entire input.
///
/// Lowercasing happens before any character stripping, so characters whose
/// lowercase form expands (e.g. `'İ'` -> `"i\u{307}"`) are lowercased first
/// and the expansion is then subject to later filters.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
