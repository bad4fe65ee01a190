//! Sentiment scoring backends.
//!
//! Two implementations of [`SentimentScorer`]:
//! - [`HttpSentimentScorer`] posts the text to a configured model endpoint.
//! - [`LexiconScorer`] is a deterministic offline fallback based on small
//!   positive/negative word lists, used when no endpoint is configured and
//!   throughout the test suite.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::services::traits::SentimentScorer;

/// HTTP client for an external sentiment model.
///
/// Wire contract: `POST endpoint` with body `{"text": "..."}`, response
/// `{"score": 0.82}`.
#[derive(Debug, Clone)]
pub struct HttpSentimentScorer {
    client: reqwest::Client,
    endpoint: Url,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    score: f32,
}

impl HttpSentimentScorer {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl SentimentScorer for HttpSentimentScorer {
    async fn score(&self, text: &str) -> Result<f32, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?
            .error_for_status()?;

        let body: ScoreResponse = response.json().await?;
        debug!(score = body.score, "sentiment endpoint responded");
        Ok(body.score)
    }
}

/// Small word lists for the offline scorer. Matched as whole tokens after
/// stripping punctuation, unlike the bias vocabulary.
const POSITIVE_WORDS: &[&str] = &[
    "love", "hope", "joy", "happy", "grateful", "bright", "excited", "wonderful", "good", "calm",
    "proud", "kind",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "alone", "tired", "afraid", "lost", "hurt", "worthless", "dark", "bad", "angry",
    "anxious", "hopeless",
];

/// Deterministic lexicon-based scorer.
///
/// Uses a Laplace-smoothed ratio `(pos + 1) / (pos + neg + 2)`, so the
/// result is always strictly inside `(0, 1)` and text with no matches
/// scores a neutral 0.5.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    fn count_matches(text: &str, words: &[&str]) -> usize {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .filter(|token| words.contains(token))
            .count()
    }

    /// Synchronous scoring core, also used directly by tests.
    pub fn score_text(&self, text: &str) -> f32 {
        let positive = Self::count_matches(text, POSITIVE_WORDS);
        let negative = Self::count_matches(text, NEGATIVE_WORDS);
        (positive as f32 + 1.0) / ((positive + negative) as f32 + 2.0)
    }
}

#[async_trait]
impl SentimentScorer for LexiconScorer {
    async fn score(&self, text: &str) -> Result<f32, AppError> {
        Ok(self.score_text(text))
    }
}
