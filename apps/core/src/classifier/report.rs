//! Thought Report - output structure for a single analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::emotion::EmotionLabel;

/// Complete result of analyzing one thought.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThoughtReport {
    /// Original input text.
    pub text: String,

    /// Sentiment score the classification was derived from.
    pub score: f32,

    /// Derived emotion label.
    pub emotion: EmotionLabel,

    /// Canned poetic line for the emotion.
    pub poetic_line: String,

    /// Bias keywords found in the text, in vocabulary order.
    pub bias_findings: Vec<String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Timestamp of analysis.
    pub timestamp: DateTime<Utc>,
}

impl ThoughtReport {
    /// Whether any bias keyword was flagged.
    pub fn has_bias(&self) -> bool {
        !self.bias_findings.is_empty()
    }

    /// The result line shown to the user, score as a percentage.
    pub fn headline(&self) -> String {
        format!("Emotion: {} ({:.1}%)", self.emotion, self.score * 100.0)
    }

    /// Human-readable bias verdict.
    pub fn bias_summary(&self) -> String {
        if self.has_bias() {
            format!(
                "Possible cognitive bias detected: {}",
                self.bias_findings.join(", ")
            )
        } else {
            "No strong bias detected".to_string()
        }
    }
}
