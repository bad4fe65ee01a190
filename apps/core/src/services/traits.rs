use async_trait::async_trait;
use url::Url;

use crate::error::AppError;
use crate::services::geocode::Coordinates;

/// Defines the public interface of the sentiment model.
///
/// The classifier treats the score as an opaque black box; any backend
/// producing a value in `[0, 1]` can be plugged in.
#[async_trait]
pub trait SentimentScorer: Send + Sync + 'static {
    /// Score the positivity of `text`, in `[0, 1]`.
    async fn score(&self, text: &str) -> Result<f32, AppError>;
}

/// Defines the public interface of the image-generation service.
///
/// Purely cosmetic: callers treat failures as non-fatal.
#[async_trait]
pub trait ArtGenerator: Send + Sync + 'static {
    /// Generate an image for `text` and return its URL.
    async fn generate(&self, text: &str) -> Result<Url, AppError>;
}

/// Defines the public interface of the geocoding service.
#[async_trait]
pub trait Geocoder: Send + Sync + 'static {
    /// Resolve a free-text location to its best-match coordinates, if any.
    async fn lookup(&self, location: &str) -> Result<Option<Coordinates>, AppError>;
}
