use thiserror::Error;

/// WGS84 position of a geocoded address
///
/// Only constructible through [`Coordinates::new`]; deserialization applies
/// the same range check.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    lat: f64, // [-90, 90]
    lon: f64, // [-180, 180]
}

#[derive(serde::Deserialize)]
struct RawCoordinates {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Latitude out of range: {0}")]
    Latitude(f64),

    #[error("Longitude out of range: {0}")]
    Longitude(f64),
}

impl Coordinates {
    /// Build coordinates, rejecting NaN and out-of-range values
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Tenant help resource attached to a rights record
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Resource {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            phone: None,
        }
    }

    pub fn with_phone(name: &str, url: &str, phone: &str) -> Self {
        Self {
            phone: Some(phone.to_string()),
            ..Self::new(name, url)
        }
    }
}

/// Tenant-protection rules for one jurisdiction
///
/// Deserialization also accepts the field names used by the legacy
/// `address_data.json` dataset (`name`, `just_cause`, `notice_requirements`,
/// `key_rights`). When both spellings are present the canonical one wins.
/// Serialization always emits the canonical names.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawJurisdictionRecord")]
pub struct JurisdictionRecord {
    pub id: String, // Filled from the dataset key when absent
    pub display_name: String,
    pub rent_control: bool,
    pub just_cause_required: bool,
    pub protections: Vec<String>,
    pub notice_requirement: String,
    pub resources: Vec<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Wire shape of a rights record, canonical and legacy names side by side
#[derive(serde::Deserialize)]
struct RawJurisdictionRecord {
    #[serde(default)]
    id: String,
    display_name: Option<String>,
    name: Option<String>,
    #[serde(default)]
    rent_control: bool,
    just_cause_required: Option<bool>,
    just_cause: Option<bool>,
    protections: Option<Vec<String>>,
    key_rights: Option<Vec<String>>,
    notice_requirement: Option<String>,
    notice_requirements: Option<String>,
    #[serde(default)]
    resources: Vec<Resource>,
    #[serde(default)]
    note: Option<String>,
}

impl TryFrom<RawJurisdictionRecord> for JurisdictionRecord {
    type Error = String;

    fn try_from(raw: RawJurisdictionRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            display_name: raw
                .display_name
                .or(raw.name)
                .ok_or("missing field `display_name`")?,
            rent_control: raw.rent_control,
            just_cause_required: raw.just_cause_required.or(raw.just_cause).unwrap_or(false),
            protections: raw.protections.or(raw.key_rights).unwrap_or_default(),
            notice_requirement: raw
                .notice_requirement
                .or(raw.notice_requirements)
                .ok_or("missing field `notice_requirement`")?,
            resources: raw.resources,
            note: raw.note,
        })
    }
}

impl JurisdictionRecord {
    /// Copy of this record carrying an explanatory note
    pub fn annotated(&self, note: &str) -> Self {
        Self {
            note: Some(note.to_string()),
            ..self.clone()
        }
    }
}

/// Jurisdiction descriptor returned to callers
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct JurisdictionSummary {
    pub id: String,
    pub display_name: String,
    pub area_type: String, // e.g., "CITY", "UNINCORPORATED AREA", "STATEWIDE"
}

/// Address lookup envelope
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LookupResult {
    pub success: bool,
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<JurisdictionSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rights: Option<JurisdictionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupResult {
    pub fn failure(input: &str, error: &str) -> Self {
        Self {
            success: false,
            input: input.to_string(),
            coordinates: None,
            resolved_address: None,
            jurisdiction: None,
            rights: None,
            error: Some(error.to_string()),
        }
    }

    pub fn resolved(
        input: &str,
        coordinates: Coordinates,
        resolved_address: String,
        jurisdiction: JurisdictionSummary,
        rights: JurisdictionRecord,
    ) -> Self {
        Self {
            success: true,
            input: input.to_string(),
            coordinates: Some(coordinates),
            resolved_address: Some(resolved_address),
            jurisdiction: Some(jurisdiction),
            rights: Some(rights),
            error: None,
        }
    }
}
