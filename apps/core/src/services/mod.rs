//! # Services Module
//!
//! Thin adapters around the external collaborators: sentiment scoring,
//! image generation and geocoding. Each sits behind an async trait so the
//! dispatcher can be exercised with test doubles.

pub mod artwork;
pub mod geocode;
pub mod sentiment;
pub mod traits;

pub use artwork::ArtClient;
pub use geocode::{Coordinates, GeoClient};
pub use sentiment::{HttpSentimentScorer, LexiconScorer};
pub use traits::{ArtGenerator, Geocoder, SentimentScorer};
