//! Geocoding collaborator interface
//!
//! The lookup pipeline only needs "address text in, coordinates out".
//! Provider specifics live in the `geocoder` crate; tests substitute stubs.

use thiserror::Error;

use crate::types::{CoordinateError, Coordinates};

/// A geocoded address
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub coordinates: Coordinates,
    pub display_name: String,
}

/// Reasons a geocoding call produced no usable location
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    Request(String),

    #[error("Geocoding request timed out after {0}s")]
    Timeout(u64),

    #[error("Invalid geocoding response: {0}")]
    InvalidResponse(String),

    #[error("Location not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    InvalidCoordinates(#[from] CoordinateError),
}

/// Address-to-coordinate resolution
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<GeocodedLocation, GeocodeError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, address: &str) -> Result<GeocodedLocation, GeocodeError> {
        (**self).geocode(address)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn geocode(&self, address: &str) -> Result<GeocodedLocation, GeocodeError> {
        (**self).geocode(address)
    }
}
