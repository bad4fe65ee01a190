//! Cognitive-bias keyword detection.
//!
//! Flags absolutist/obligation words ("always", "must", ...) by
//! case-insensitive substring matching. Deliberately word-boundary
//! insensitive: "shoulder" flags "should". Findings follow vocabulary
//! order, not occurrence order.

use crate::config::{ClassifierConfig, DEFAULT_BIAS_VOCABULARY};

/// Detector over a fixed, ordered keyword vocabulary.
#[derive(Debug, Clone)]
pub struct BiasDetector {
    vocabulary: Vec<String>,
}

impl Default for BiasDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl BiasDetector {
    /// Create a detector with the default vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(DEFAULT_BIAS_VOCABULARY.iter().map(|s| s.to_string()))
    }

    /// Create a detector from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::with_vocabulary(config.bias_vocabulary.iter().cloned())
    }

    /// Create a detector over a custom vocabulary. Keywords are folded to
    /// lowercase; their order is preserved in the output.
    pub fn with_vocabulary<I>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            vocabulary: vocabulary.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Return every vocabulary keyword present in `text` as a substring.
    pub fn detect(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let lowered = text.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|word| lowered.contains(word.as_str()))
            .cloned()
            .collect()
    }

    /// The vocabulary this detector matches against.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}
