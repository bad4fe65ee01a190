//! Thought Analyzer - main orchestrator for the classifier module.
//!
//! Combines emotion bucketing, bias detection and the poetic lookup into a
//! single [`ThoughtReport`]. Stateless and pure: the sentiment score is an
//! input, not something this module computes.

use chrono::Utc;
use std::time::Instant;

use super::bias::BiasDetector;
use super::emotion::EmotionClassifier;
use super::report::ThoughtReport;
use super::verse::poetic_line;
use crate::config::ClassifierConfig;

/// Analyzer bundling the three classification rules.
#[derive(Debug, Clone)]
pub struct ThoughtAnalyzer {
    emotion: EmotionClassifier,
    bias: BiasDetector,
}

impl Default for ThoughtAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ThoughtAnalyzer {
    /// Create an analyzer with default thresholds and vocabulary.
    pub fn new() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }

    /// Create an analyzer from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            emotion: EmotionClassifier::from_config(config),
            bias: BiasDetector::from_config(config),
        }
    }

    /// Analyze a thought given its externally computed sentiment score.
    pub fn analyze(&self, text: &str, score: f32) -> ThoughtReport {
        let start = Instant::now();

        let emotion = self.emotion.classify(score);
        let bias_findings = self.bias.detect(text);

        ThoughtReport {
            text: text.to_string(),
            score,
            emotion,
            poetic_line: poetic_line(emotion).to_string(),
            bias_findings,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        }
    }
}
