//! Emotion bucketing over an externally produced sentiment score.
//!
//! The score itself comes from an opaque sentiment model (see
//! `services::SentimentScorer`); this module only applies the two cutoffs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ClassifierConfig;

/// Three-way emotion label derived from a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    /// Score above the hopeful threshold.
    Hopeful,
    /// Score below the heavy threshold.
    Heavy,
    /// Everything in between.
    Mixed,
}

impl EmotionLabel {
    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EmotionLabel::Hopeful => "Hopeful",
            EmotionLabel::Heavy => "Heavy",
            EmotionLabel::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Deterministic, total classifier over the real line.
///
/// Out-of-range scores are accepted and fall through the same comparisons:
/// anything below the heavy cutoff is Heavy, anything above the hopeful
/// cutoff is Hopeful. Callers clamp if they want a stricter contract.
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    hopeful_threshold: f32,
    heavy_threshold: f32,
}

impl Default for EmotionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionClassifier {
    /// Create a classifier with the default cutoffs (0.75 / 0.40).
    pub fn new() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }

    /// Create a classifier from configured cutoffs.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            hopeful_threshold: config.hopeful_threshold,
            heavy_threshold: config.heavy_threshold,
        }
    }

    /// Classify a sentiment score into an emotion label.
    pub fn classify(&self, score: f32) -> EmotionLabel {
        if score > self.hopeful_threshold {
            EmotionLabel::Hopeful
        } else if score < self.heavy_threshold {
            EmotionLabel::Heavy
        } else {
            EmotionLabel::Mixed
        }
    }
}
