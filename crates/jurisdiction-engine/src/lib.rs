//! Address-to-jurisdiction resolution for tenant rights lookups
//!
//! Pipeline: geocode (collaborator) -> point-in-polygon -> rights fallback
//! chain. Only geocoding failures surface as errors; every other "don't know"
//! degrades to a fallback value.

pub mod boundaries;
pub mod error;
pub mod jurisdiction;
pub mod layers;
pub mod resolver;
pub mod rights;

pub use boundaries::{load_boundaries, BoundaryStore, JurisdictionBoundary};
pub use error::DataError;
pub use jurisdiction::{map_jurisdiction, City, CALIFORNIA_STATEWIDE, LA_COUNTY};
pub use resolver::find_jurisdiction;
pub use rights::{load_rights, RightsResolution, RightsResolver, RightsSource, RightsStore};

use shared_types::{Coordinates, Geocoder, JurisdictionSummary, LookupResult};
use tracing::{debug, info, warn};

use crate::jurisdiction::{OUTSIDE_BOUNDARIES_NAME, STATEWIDE_AREA};

/// User-facing message for any geocoding failure
pub const GEOCODE_FAILURE_MESSAGE: &str =
    "Could not geocode address. Please check spelling and try again.";

/// Lookup Orchestrator entry point
pub struct LookupEngine<G> {
    geocoder: G,
    boundaries: BoundaryStore,
    rights: RightsResolver,
}

impl<G: Geocoder> LookupEngine<G> {
    pub fn new(geocoder: G, boundaries: BoundaryStore, rights: RightsStore) -> Self {
        Self {
            geocoder,
            boundaries,
            rights: RightsResolver::new(rights),
        }
    }

    pub fn boundaries(&self) -> &BoundaryStore {
        &self.boundaries
    }

    pub fn rights(&self) -> &RightsResolver {
        &self.rights
    }

    /// Jurisdiction containing the point, or the statewide placeholder
    pub fn locate(&self, coordinates: Coordinates) -> JurisdictionSummary {
        match find_jurisdiction(self.boundaries.ensure_loaded(), coordinates) {
            Some(boundary) => boundary.summary(),
            None => {
                debug!(
                    lat = coordinates.lat(),
                    lon = coordinates.lon(),
                    "No boundary contains point; using statewide placeholder"
                );
                outside_boundaries()
            }
        }
    }

    /// Resolve a free-text address to its jurisdiction and tenant rights
    pub fn lookup(&self, address: &str) -> LookupResult {
        if address.trim().is_empty() {
            warn!("Empty address; skipping geocoding");
            return LookupResult::failure(address, GEOCODE_FAILURE_MESSAGE);
        }

        let location = match self.geocoder.geocode(address) {
            Ok(location) => location,
            Err(e) => {
                warn!(address = %address, "Geocoding failed: {}", e);
                return LookupResult::failure(address, GEOCODE_FAILURE_MESSAGE);
            }
        };

        let jurisdiction = self.locate(location.coordinates);
        let rights = self.rights.rights_for(&jurisdiction.id);

        info!(
            "{} -> {} ({})",
            address, jurisdiction.display_name, jurisdiction.id
        );

        LookupResult::resolved(
            address,
            location.coordinates,
            location.display_name,
            jurisdiction,
            rights,
        )
    }
}

/// Placeholder for points outside every loaded boundary
pub fn outside_boundaries() -> JurisdictionSummary {
    JurisdictionSummary {
        id: CALIFORNIA_STATEWIDE.to_string(),
        display_name: OUTSIDE_BOUNDARIES_NAME.to_string(),
        area_type: STATEWIDE_AREA.to_string(),
    }
}
