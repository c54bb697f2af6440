pub mod geocode;
pub mod types;

pub use geocode::{GeocodeError, GeocodedLocation, Geocoder};
pub use types::{
    CoordinateError, Coordinates, JurisdictionRecord, JurisdictionSummary, LookupResult, Resource,
};
