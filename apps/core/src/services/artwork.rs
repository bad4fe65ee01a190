//! Image-generation service adapter.
//!
//! Posts the thought text to the configured endpoint and returns the URL of
//! the rendered image. The API key comes from configuration (environment),
//! never from source, and is never logged.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::config::ArtConfig;
use crate::error::AppError;
use crate::services::traits::ArtGenerator;

/// HTTP client for the text-to-image service.
///
/// Wire contract: `POST endpoint` with header `api-key` and body
/// `{"text": "..."}`, response `{"output_url": "https://..."}`.
#[derive(Debug, Clone)]
pub struct ArtClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ArtResponse {
    output_url: String,
}

impl ArtClient {
    /// Build a client from configuration. Returns `None` when no API key is
    /// configured, which disables art generation.
    pub fn from_config(config: &ArtConfig) -> Option<Self> {
        config.api_key.as_ref().map(|key| Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: key.clone(),
        })
    }
}

#[async_trait]
impl ArtGenerator for ArtClient {
    async fn generate(&self, text: &str) -> Result<Url, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("api-key", &self.api_key)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?
            .error_for_status()?;

        let body: ArtResponse = response.json().await?;
        let url = Url::parse(&body.output_url)
            .map_err(|e| AppError::Service(format!("art service returned invalid URL: {}", e)))?;
        Ok(url)
    }
}
