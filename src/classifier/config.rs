//! Configuration for the Naive Bayes classifier.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::{Result, SpendcatError};

/// Configuration for [`NaiveBayesClassifier`](super::NaiveBayesClassifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Additive smoothing constant added to every token count.
    ///
    /// `1.0` is Laplace smoothing. Must be finite and strictly positive so
    /// every per-token likelihood stays strictly positive.
    pub smoothing: f64,

    /// Category returned when every category scores negative infinity.
    pub fallback: Category,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self {
            smoothing: 1.0,
            fallback: Category::Other,
        }
    }
}

impl NaiveBayesConfig {
    /// Set the smoothing constant.
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the fallback category.
    pub fn with_fallback(mut self, fallback: Category) -> Self {
        self.fallback = fallback;
        self
    }

    /// Check the configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(SpendcatError::invalid_config(format!(
                "smoothing must be a finite positive number, got {}",
                self.smoothing
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: NaiveBayesConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = NaiveBayesConfig::default();
        assert_eq!(config.smoothing, 1.0);
        assert_eq!(config.fallback, Category::Other);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_smoothing() {
        for smoothing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = NaiveBayesConfig::default().with_smoothing(smoothing);
            assert!(matches!(
                config.validate(),
                Err(SpendcatError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_from_json_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"smoothing": 0.5}}"#).unwrap();

        let config = NaiveBayesConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.smoothing, 0.5);
        assert_eq!(config.fallback, Category::Other);
    }

    #[test]
    fn test_from_json_file_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"smoothing": 0.0, "fallback": "SHOPPING"}}"#).unwrap();

        let result = NaiveBayesConfig::from_json_file(file.path());
        assert!(matches!(result, Err(SpendcatError::InvalidConfig(_))));
    }
}
