//! Jurisdiction identifiers and the boundary-name mapper
//!
//! Boundary datasets label each polygon with a raw locality name
//! (`"LOS ANGELES"`) and an area type (`"UNINCORPORATED AREA"`). Rights data
//! is keyed by canonical snake_case ids. The mapper bridges the two:
//! - Known incorporated cities map to their own id
//! - Unincorporated county land maps to the county-wide id
//! - Anything else falls back to statewide rules

use serde::{Deserialize, Serialize};

/// County-wide id for unincorporated areas
pub const LA_COUNTY: &str = "la_county";

/// Statewide default id
pub const CALIFORNIA_STATEWIDE: &str = "california_statewide";

/// Area-type tag the county dataset uses for unincorporated land
pub const UNINCORPORATED_AREA: &str = "UNINCORPORATED AREA";

/// Area type reported for the placeholder jurisdiction
pub const STATEWIDE_AREA: &str = "STATEWIDE";

/// Display name reported when a point falls outside every loaded boundary
pub const OUTSIDE_BOUNDARIES_NAME: &str = "Outside LA County boundaries";

/// Sentinel for boundary properties the dataset does not carry
pub const UNKNOWN: &str = "Unknown";

/// Incorporated cities with their own ordinances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    LosAngeles,
    LongBeach,
    Glendale,
    Pasadena,
    SantaMonica,
    WestHollywood,
    BeverlyHills,
    CulverCity,
    Inglewood,
}

impl City {
    /// Canonical jurisdiction id (rights dataset key)
    pub fn id(&self) -> &'static str {
        match self {
            City::LosAngeles => "los_angeles_city",
            City::LongBeach => "long_beach",
            City::Glendale => "glendale",
            City::Pasadena => "pasadena",
            City::SantaMonica => "santa_monica",
            City::WestHollywood => "west_hollywood",
            City::BeverlyHills => "beverly_hills",
            City::CulverCity => "culver_city",
            City::Inglewood => "inglewood",
        }
    }

    /// Name as it appears in the county boundary dataset
    pub fn boundary_name(&self) -> &'static str {
        match self {
            City::LosAngeles => "LOS ANGELES",
            City::LongBeach => "LONG BEACH",
            City::Glendale => "GLENDALE",
            City::Pasadena => "PASADENA",
            City::SantaMonica => "SANTA MONICA",
            City::WestHollywood => "WEST HOLLYWOOD",
            City::BeverlyHills => "BEVERLY HILLS",
            City::CulverCity => "CULVER CITY",
            City::Inglewood => "INGLEWOOD",
        }
    }

    /// Parse a boundary locality name (case and surrounding whitespace ignored)
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "LOS ANGELES" => Some(City::LosAngeles),
            "LONG BEACH" => Some(City::LongBeach),
            "GLENDALE" => Some(City::Glendale),
            "PASADENA" => Some(City::Pasadena),
            "SANTA MONICA" => Some(City::SantaMonica),
            "WEST HOLLYWOOD" => Some(City::WestHollywood),
            "BEVERLY HILLS" => Some(City::BeverlyHills),
            "CULVER CITY" => Some(City::CulverCity),
            "INGLEWOOD" => Some(City::Inglewood),
            _ => None,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            City::LosAngeles,
            City::LongBeach,
            City::Glendale,
            City::Pasadena,
            City::SantaMonica,
            City::WestHollywood,
            City::BeverlyHills,
            City::CulverCity,
            City::Inglewood,
        ]
    }
}

/// Map a boundary's locality name and area type to a canonical jurisdiction id
///
/// Never fails: unknown incorporated cities resolve to statewide rules.
pub fn map_jurisdiction(locality_name: &str, area_type: &str) -> &'static str {
    if let Some(city) = City::parse_name(locality_name) {
        return city.id();
    }

    if area_type.trim().eq_ignore_ascii_case(UNINCORPORATED_AREA) {
        return LA_COUNTY;
    }

    CALIFORNIA_STATEWIDE
}

/// Title-case a raw dataset name (`"EAST LOS ANGELES"` -> `"East Los Angeles"`)
pub fn display_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
