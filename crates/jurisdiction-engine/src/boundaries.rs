//! Boundary Loader
//!
//! Reads a GeoJSON feature collection of jurisdiction polygons. Each feature
//! is mapped to a canonical jurisdiction id via [`map_jurisdiction`]; features
//! with unusable geometry are skipped without aborting the load.

use std::fs;
use std::path::{Path, PathBuf};

use geo::{Coord, LineString, MultiPolygon, Polygon};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::error::DataError;
use crate::jurisdiction::{display_name, map_jurisdiction, UNKNOWN};

/// Property keys holding the locality name, in priority order
///
/// LA County's `CITY_COMM_NAME`, then generic census/OSM style names.
pub const LOCALITY_NAME_KEYS: &[&str] = &["CITY_COMM_NAME", "CITY_NAME", "NAME", "name"];

/// Property keys holding the area type, in priority order
///
/// LA County's `JURISDICTION` carries `"UNINCORPORATED AREA"` / `"CITY"`.
pub const AREA_TYPE_KEYS: &[&str] = &["JURISDICTION", "CITY_TYPE", "TYPE", "type"];

/// One jurisdiction polygon from the boundary dataset
#[derive(Debug, Clone, PartialEq)]
pub struct JurisdictionBoundary {
    pub id: String,
    pub display_name: String,
    pub area_type: String,
    pub polygon: MultiPolygon<f64>,
}

/// GeoJSON geometry shapes a jurisdiction can take
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
}

/// First non-empty string value among `keys`, else [`UNKNOWN`]
pub fn read_property(properties: Option<&Map<String, Value>>, keys: &[&str]) -> String {
    properties
        .and_then(|props| {
            keys.iter()
                .filter_map(|key| props.get(*key).and_then(Value::as_str))
                .map(str::trim)
                .find(|value| !value.is_empty())
        })
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// Parse a GeoJSON geometry object into a multipolygon
pub fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>, DataError> {
    if geometry.is_null() {
        return Err(DataError::Geometry("feature has no geometry".to_string()));
    }

    let raw: RawGeometry = serde_json::from_value(geometry.clone())
        .map_err(|e| DataError::Geometry(e.to_string()))?;

    let polygons = match raw {
        RawGeometry::Polygon { coordinates } => vec![to_polygon(coordinates)?],
        RawGeometry::MultiPolygon { coordinates } => coordinates
            .into_iter()
            .map(to_polygon)
            .collect::<Result<Vec<_>, _>>()?,
    };

    if polygons.is_empty() {
        return Err(DataError::Geometry("multipolygon has no members".to_string()));
    }

    Ok(MultiPolygon::new(polygons))
}

fn to_polygon(rings: Vec<Vec<Vec<f64>>>) -> Result<Polygon<f64>, DataError> {
    let mut rings = rings.into_iter().map(to_ring);

    let exterior = rings
        .next()
        .ok_or_else(|| DataError::Geometry("polygon has no exterior ring".to_string()))??;
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;

    Ok(Polygon::new(exterior, interiors))
}

fn to_ring(positions: Vec<Vec<f64>>) -> Result<LineString<f64>, DataError> {
    // GeoJSON positions are [longitude, latitude, (altitude)]
    let coords = positions
        .into_iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Coord { x: *x, y: *y }),
            _ => Err(DataError::Geometry(format!(
                "invalid position {:?}",
                position
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if coords.len() < 3 {
        return Err(DataError::Geometry(format!(
            "ring has {} positions, need at least 3",
            coords.len()
        )));
    }

    Ok(LineString::new(coords))
}

/// Build a boundary record from one GeoJSON feature
pub fn parse_feature(feature: &Value) -> Result<JurisdictionBoundary, DataError> {
    let properties = feature.get("properties").and_then(Value::as_object);
    let locality_name = read_property(properties, LOCALITY_NAME_KEYS);
    let area_type = read_property(properties, AREA_TYPE_KEYS);

    let polygon = parse_geometry(feature.get("geometry").unwrap_or(&Value::Null))?;

    Ok(JurisdictionBoundary {
        id: map_jurisdiction(&locality_name, &area_type).to_string(),
        display_name: display_name(&locality_name),
        area_type,
        polygon,
    })
}

/// Parse a feature collection, skipping features with bad geometry
pub fn parse_boundaries(path: &Path, data: &Value) -> Result<Vec<JurisdictionBoundary>, DataError> {
    let features = data
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| DataError::NotFeatureCollection(path.to_path_buf()))?;

    let mut boundaries = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        match parse_feature(feature) {
            Ok(boundary) => {
                debug!(
                    "Boundary {}: {} -> {}",
                    index, boundary.display_name, boundary.id
                );
                boundaries.push(boundary);
            }
            Err(e) => {
                let name = read_property(
                    feature.get("properties").and_then(Value::as_object),
                    LOCALITY_NAME_KEYS,
                );
                warn!(feature = index, name = %name, "Could not parse geometry: {}", e);
            }
        }
    }

    Ok(boundaries)
}

/// Load a boundary dataset, surfacing every failure
pub fn load_boundaries(path: &Path) -> Result<Vec<JurisdictionBoundary>, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data: Value = serde_json::from_str(&content).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    parse_boundaries(path, &data)
}

/// Load-once owner of the boundary dataset
///
/// A missing or unreadable file yields an empty set so lookups fall through
/// to the statewide rules instead of failing.
#[derive(Debug)]
pub struct BoundaryStore {
    source: Option<PathBuf>,
    boundaries: OnceCell<Vec<JurisdictionBoundary>>,
}

impl BoundaryStore {
    /// Store that reads `path` on first use
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            boundaries: OnceCell::new(),
        }
    }

    /// Store pre-populated with in-memory boundaries
    pub fn from_boundaries(boundaries: Vec<JurisdictionBoundary>) -> Self {
        Self {
            source: None,
            boundaries: OnceCell::with_value(boundaries),
        }
    }

    /// Load the dataset if needed and return it
    pub fn ensure_loaded(&self) -> &[JurisdictionBoundary] {
        self.boundaries.get_or_init(|| match &self.source {
            Some(path) => load_or_empty(path),
            None => Vec::new(),
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.boundaries.get().is_some()
    }
}

fn load_or_empty(path: &Path) -> Vec<JurisdictionBoundary> {
    match load_boundaries(path) {
        Ok(boundaries) => {
            info!("Loaded {} jurisdiction boundaries", boundaries.len());
            boundaries
        }
        Err(e) if e.is_not_found() => {
            warn!("Boundaries file not found: {}", path.display());
            Vec::new()
        }
        Err(e) => {
            error!("Ignoring boundary dataset: {}", e);
            Vec::new()
        }
    }
}
