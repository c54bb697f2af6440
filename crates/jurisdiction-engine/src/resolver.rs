//! Point-in-Polygon Resolver

use geo::{Contains, Point};
use shared_types::{Coordinates, JurisdictionSummary};

use crate::boundaries::JurisdictionBoundary;

/// First boundary (in load order) whose polygon contains `coordinates`
///
/// Linear scan; overlapping polygons resolve to whichever was loaded first.
pub fn find_jurisdiction(
    boundaries: &[JurisdictionBoundary],
    coordinates: Coordinates,
) -> Option<&JurisdictionBoundary> {
    // x = longitude, y = latitude
    let point = Point::new(coordinates.lon(), coordinates.lat());

    boundaries
        .iter()
        .find(|boundary| boundary.polygon.contains(&point))
}

impl JurisdictionBoundary {
    pub fn summary(&self) -> JurisdictionSummary {
        JurisdictionSummary {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            area_type: self.area_type.clone(),
        }
    }
}
