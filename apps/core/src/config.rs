//! Runtime configuration loaded from environment variables.
//!
//! The emotion thresholds and the bias vocabulary are arbitrary product
//! constants. They are kept as configuration with the historical defaults
//! rather than baked into the classifier logic.
//!
//! Secrets (the art service API key) are only ever sourced from the
//! environment; an absent key disables the art adapter instead of failing
//! startup.

use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Historical default for the Hopeful cutoff (`score > 0.75`).
pub const DEFAULT_HOPEFUL_THRESHOLD: f32 = 0.75;

/// Historical default for the Heavy cutoff (`score < 0.40`).
pub const DEFAULT_HEAVY_THRESHOLD: f32 = 0.40;

/// Absolutist/obligation words flagged as potential cognitive-bias indicators.
/// Order matters: findings are reported in vocabulary order.
pub const DEFAULT_BIAS_VOCABULARY: &[&str] =
    &["always", "never", "everyone", "no one", "should", "must"];

const DEFAULT_ART_ENDPOINT: &str = "https://api.deepai.org/api/text2img";
const DEFAULT_GEOCODE_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_GEOCODE_USER_AGENT: &str = "kindkart/1.0";

/// Settings for the rule-based text classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_thresholds))]
pub struct ClassifierConfig {
    /// Scores strictly above this value classify as Hopeful.
    #[validate(range(min = 0.0, max = 1.0))]
    pub hopeful_threshold: f32,
    /// Scores strictly below this value classify as Heavy.
    #[validate(range(min = 0.0, max = 1.0))]
    pub heavy_threshold: f32,
    /// Ordered bias keyword vocabulary, matched case-insensitively.
    #[validate(length(min = 1))]
    pub bias_vocabulary: Vec<String>,
}

fn validate_thresholds(config: &ClassifierConfig) -> Result<(), ValidationError> {
    if config.heavy_threshold > config.hopeful_threshold {
        return Err(ValidationError::new("heavy_threshold_above_hopeful"));
    }
    Ok(())
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hopeful_threshold: DEFAULT_HOPEFUL_THRESHOLD,
            heavy_threshold: DEFAULT_HEAVY_THRESHOLD,
            bias_vocabulary: DEFAULT_BIAS_VOCABULARY
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Settings for the external sentiment scorer.
///
/// When no endpoint is configured the application falls back to the
/// built-in lexicon scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentConfig {
    pub endpoint: Option<Url>,
}

/// Settings for the image-generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtConfig {
    pub endpoint: Url,
    /// API key, sourced from `NEUROLENS_ART_API_KEY`. `None` disables art
    /// generation entirely.
    pub api_key: Option<String>,
}

/// Settings for the geocoding service used by the donation map.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeocodeConfig {
    pub endpoint: Url,
    /// User-Agent header, required by the public Nominatim instance.
    #[validate(length(min = 1))]
    pub user_agent: String,
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub classifier: ClassifierConfig,
    pub sentiment: SentimentConfig,
    pub art: ArtConfig,
    #[validate(nested)]
    pub geocode: GeocodeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            sentiment: SentimentConfig::default(),
            art: ArtConfig {
                endpoint: Url::parse(DEFAULT_ART_ENDPOINT).expect("default art endpoint is valid"),
                api_key: None,
            },
            geocode: GeocodeConfig {
                endpoint: Url::parse(DEFAULT_GEOCODE_ENDPOINT)
                    .expect("default geocode endpoint is valid"),
                user_agent: DEFAULT_GEOCODE_USER_AGENT.to_string(),
            },
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_threshold(name: &str, raw: &str) -> Result<f32, AppError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| AppError::Config(format!("{} is not a valid number: {:?}", name, raw)))
}

fn parse_endpoint(name: &str, raw: &str) -> Result<Url, AppError> {
    Url::parse(raw.trim()).map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", name, e)))
}

impl AppConfig {
    /// Load configuration from already-set environment variables.
    ///
    /// Does not call `dotenv()` itself; the binary does that once at startup
    /// so tests can control the environment precisely.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] for unparseable values and
    /// [`AppError::Validation`] for out-of-range ones.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(raw) = env_var("NEUROLENS_HOPEFUL_THRESHOLD") {
            config.classifier.hopeful_threshold =
                parse_threshold("NEUROLENS_HOPEFUL_THRESHOLD", &raw)?;
        }
        if let Some(raw) = env_var("NEUROLENS_HEAVY_THRESHOLD") {
            config.classifier.heavy_threshold =
                parse_threshold("NEUROLENS_HEAVY_THRESHOLD", &raw)?;
        }
        if let Some(raw) = env_var("NEUROLENS_BIAS_VOCABULARY") {
            config.classifier.bias_vocabulary = raw
                .split(',')
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
        }

        if let Some(raw) = env_var("NEUROLENS_SENTIMENT_ENDPOINT") {
            config.sentiment.endpoint = Some(parse_endpoint("NEUROLENS_SENTIMENT_ENDPOINT", &raw)?);
        }

        if let Some(raw) = env_var("NEUROLENS_ART_ENDPOINT") {
            config.art.endpoint = parse_endpoint("NEUROLENS_ART_ENDPOINT", &raw)?;
        }
        config.art.api_key = env_var("NEUROLENS_ART_API_KEY");

        if let Some(raw) = env_var("KINDKART_GEOCODE_ENDPOINT") {
            config.geocode.endpoint = parse_endpoint("KINDKART_GEOCODE_ENDPOINT", &raw)?;
        }
        if let Some(raw) = env_var("KINDKART_GEOCODE_USER_AGENT") {
            config.geocode.user_agent = raw;
        }

        config.validate()?;
        Ok(config)
    }
}
