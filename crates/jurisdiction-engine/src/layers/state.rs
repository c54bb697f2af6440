//! State Layer - California statewide minimums
//!
//! Last tier of the fallback chain. Applies everywhere in California:
//! - Tenant Protection Act (AB 1482): just cause after 12 months, rent cap
//! - Statutory notice periods (Civil Code 1946.1)

use shared_types::{JurisdictionRecord, Resource};

use crate::jurisdiction::CALIFORNIA_STATEWIDE;

/// Note attached when the dataset's statewide entry stands in for a local one
pub const STATEWIDE_DATASET_NOTE: &str = "Specific rules for this jurisdiction not yet verified. \
     Showing California statewide protections.";

/// Note attached to the hard-coded statewide minimum
pub const STATEWIDE_MINIMUM_NOTE: &str =
    "Could not determine specific local rules. Showing CA state minimums.";

/// Hard-coded California statewide record
///
/// Used only when neither the dataset nor the local layer knows the id.
pub fn statewide_minimum() -> JurisdictionRecord {
    JurisdictionRecord {
        id: CALIFORNIA_STATEWIDE.to_string(),
        display_name: "California (Statewide)".to_string(),
        rent_control: false,
        just_cause_required: true,
        protections: vec![
            "California Tenant Protection Act (AB 1482) applies".to_string(),
            "Just-cause eviction for tenancies >12 months".to_string(),
            "Rent cap: 5% + local CPI (max 10%) annually".to_string(),
        ],
        notice_requirement: "60-day notice for tenancies >1 year, 30-day for <1 year"
            .to_string(),
        resources: vec![Resource::new(
            "CA Courts Self-Help",
            "https://www.courts.ca.gov/selfhelp-housing.htm",
        )],
        note: Some(STATEWIDE_MINIMUM_NOTE.to_string()),
    }
}
