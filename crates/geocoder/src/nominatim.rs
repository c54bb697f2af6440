//! Nominatim (OpenStreetMap) geocoding client

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use shared_types::{Coordinates, GeocodeError, GeocodedLocation, Geocoder};
use tracing::{debug, error, instrument, warn};

use crate::throttle::Throttle;

/// Nominatim API response for geocoding
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

/// Connection and query settings for the Nominatim client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NominatimConfig {
    /// Service root; `/search` is appended
    pub base_url: String,
    /// Nominatim rejects requests without an identifying User-Agent
    pub user_agent: String,
    /// Appended to every query to bias results (empty to disable)
    pub region_hint: String,
    /// Comma-separated ISO country codes (empty to disable)
    pub country_codes: String,
    /// Minimum spacing between requests, from the end of the previous one
    pub min_interval_ms: u64,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "JusticeMapMVP/1.0 (LA-tenant-rights-project)".to_string(),
            region_hint: "Los Angeles County, California, USA".to_string(),
            country_codes: "us".to_string(),
            min_interval_ms: 1000,
            timeout_secs: 10,
        }
    }
}

/// Rate-limited Nominatim geocoder
#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    config: NominatimConfig,
    throttle: Throttle,
}

impl NominatimGeocoder {
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodeError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            throttle: Throttle::new(Duration::from_millis(config.min_interval_ms)),
            config,
        })
    }

    /// Free-text query sent to the service
    pub fn query_for(&self, address: &str) -> String {
        let address = address.trim();
        let hint = self.config.region_hint.trim();
        if hint.is_empty() {
            address.to_string()
        } else {
            format!("{}, {}", address, hint)
        }
    }

    fn search(&self, address: &str) -> Result<GeocodedLocation, GeocodeError> {
        let query = self.query_for(address);
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));

        let mut params = vec![("q", query.as_str()), ("format", "json"), ("limit", "1")];
        if !self.config.country_codes.is_empty() {
            params.push(("countrycodes", self.config.country_codes.as_str()));
        }

        debug!("Geocoding location: {}", query);

        let places: Vec<NominatimPlace> = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                error!(error = %e, address = %address, "Geocoding API request failed");
                if e.is_timeout() {
                    GeocodeError::Timeout(self.config.timeout_secs)
                } else {
                    GeocodeError::Request(e.to_string())
                }
            })?
            .json()
            .map_err(|e| {
                error!(error = %e, "Failed to parse geocoding response");
                GeocodeError::InvalidResponse(e.to_string())
            })?;

        let place = places.into_iter().next().ok_or_else(|| {
            warn!(address = %address, "Location not found by geocoding API");
            GeocodeError::NotFound(query.clone())
        })?;

        let lat: f64 = place
            .lat
            .trim()
            .parse()
            .map_err(|e| GeocodeError::InvalidResponse(format!("Invalid latitude: {}", e)))?;
        let lon: f64 = place
            .lon
            .trim()
            .parse()
            .map_err(|e| GeocodeError::InvalidResponse(format!("Invalid longitude: {}", e)))?;

        let coordinates = Coordinates::new(lat, lon)?;
        debug!("Geocoded {} -> ({}, {})", query, lat, lon);

        Ok(GeocodedLocation {
            coordinates,
            display_name: place.display_name,
        })
    }
}

impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    fn geocode(&self, address: &str) -> Result<GeocodedLocation, GeocodeError> {
        self.throttle.wait();
        let result = self.search(address);
        self.throttle.mark_complete();
        result
    }
}
