//! Geocoding service adapter for the donation map.
//!
//! Queries a Nominatim-style endpoint and returns at most one best-match
//! coordinate pair. An empty result set is `None`, not an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::GeocodeConfig;
use crate::error::AppError;
use crate::services::traits::Geocoder;

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// HTTP client for the geocoding service.
///
/// Wire contract: `GET endpoint?q=<location>&format=json&limit=1`, response
/// a JSON array of places with string `lat`/`lon` fields.
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: reqwest::Client,
    endpoint: Url,
    user_agent: String,
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl GeoClient {
    pub fn from_config(config: &GeocodeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    fn parse_place(place: &Place) -> Result<Coordinates, AppError> {
        let lat = place.lat.parse::<f64>().map_err(|_| {
            AppError::Service(format!("geocoder returned invalid latitude: {:?}", place.lat))
        })?;
        let lon = place.lon.parse::<f64>().map_err(|_| {
            AppError::Service(format!("geocoder returned invalid longitude: {:?}", place.lon))
        })?;
        Ok(Coordinates { lat, lon })
    }
}

#[async_trait]
impl Geocoder for GeoClient {
    async fn lookup(&self, location: &str) -> Result<Option<Coordinates>, AppError> {
        if location.trim().is_empty() {
            return Ok(None);
        }

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[("q", location), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?;

        let places: Vec<Place> = response.json().await?;
        match places.first() {
            Some(place) => {
                let coords = Self::parse_place(place)?;
                debug!(lat = coords.lat, lon = coords.lon, "geocoded location");
                Ok(Some(coords))
            }
            None => Ok(None),
        }
    }
}
