//! Geocoding adapters
//!
//! [`NominatimGeocoder`] implements the pipeline's [`shared_types::Geocoder`]
//! against OpenStreetMap Nominatim, spacing calls with a [`Throttle`].

pub mod nominatim;
pub mod throttle;

pub use nominatim::{NominatimConfig, NominatimGeocoder};
pub use throttle::Throttle;
