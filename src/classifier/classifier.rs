//! Category classifier trait definition.

use crate::error::Result;

use super::category::Category;

/// Category classifier trait.
///
/// Implementations assign exactly one [`Category`] to a free-text
/// transaction description.
pub trait CategoryClassifier: Send + Sync {
    /// Predict the category for a given description.
    ///
    /// # Arguments
    /// * `text` - The description to classify
    ///
    /// # Returns
    /// The single best-matching `Category`
    fn classify(&self, text: &str) -> Result<Category>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
