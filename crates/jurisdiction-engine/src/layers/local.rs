//! Local Layer - Municipal/County Ordinance Defaults
//!
//! Built-in records for the jurisdictions the boundary mapper knows by name,
//! so a lookup still returns local rules when the rights dataset is missing or
//! incomplete.
//!
//! Key localities:
//! - Los Angeles (City): RSO, Just Cause Ordinance, relocation assistance
//! - Santa Monica / West Hollywood: rent control, just cause for all units
//! - Beverly Hills, Culver City, Inglewood, Pasadena: local rent caps
//! - Glendale / Long Beach: just cause and relocation, no rent control
//! - LA County (unincorporated): RSTPO rent stabilization

use shared_types::{JurisdictionRecord, Resource};

use crate::jurisdiction::{City, LA_COUNTY};

/// Built-in record for a well-known jurisdiction id
pub fn local_record(id: &str) -> Option<JurisdictionRecord> {
    if id == LA_COUNTY {
        return Some(la_county());
    }

    let city = City::all().into_iter().find(|city| city.id() == id)?;
    Some(match city {
        City::LosAngeles => los_angeles(),
        City::SantaMonica => santa_monica(),
        City::WestHollywood => west_hollywood(),
        City::BeverlyHills => beverly_hills(),
        City::CulverCity => culver_city(),
        City::Inglewood => inglewood(),
        City::Pasadena => pasadena(),
        City::Glendale => glendale(),
        City::LongBeach => long_beach(),
    })
}

fn record(
    id: &str,
    display_name: &str,
    rent_control: bool,
    protections: &[&str],
    notice_requirement: &str,
    resources: Vec<Resource>,
) -> JurisdictionRecord {
    JurisdictionRecord {
        id: id.to_string(),
        display_name: display_name.to_string(),
        rent_control,
        // Every built-in jurisdiction is covered by at least AB 1482 just cause
        just_cause_required: true,
        protections: protections.iter().map(|p| p.to_string()).collect(),
        notice_requirement: notice_requirement.to_string(),
        resources,
        note: None,
    }
}

/// Notice periods shared by jurisdictions without a local override
const STATE_NOTICE: &str =
    "60-day notice for tenancies >1 year, 30-day for <1 year; 3-day notice to pay rent or quit";

fn stay_housed_la() -> Resource {
    Resource::new("Stay Housed L.A.", "https://www.stayhousedla.org")
}

// ============================================================================
// Los Angeles (City)
// ============================================================================

/// LAMC Chapter XV (RSO) and the Just Cause Ordinance (2022)
fn los_angeles() -> JurisdictionRecord {
    record(
        City::LosAngeles.id(),
        "Los Angeles (City)",
        true,
        &[
            "Rent Stabilization Ordinance (RSO) covers most units built on or before October 1, 1978",
            "Just Cause Ordinance protects most tenants after 6 months or lease expiration",
            "Relocation assistance required for no-fault evictions",
            "Annual RSO rent increases limited to the percentage set by LAHD",
        ],
        "30-day notice for tenancies <1 year, 60-day for >1 year; 3-day notice to pay rent or quit",
        vec![
            Resource::with_phone(
                "LA Housing Department (LAHD)",
                "https://housing.lacity.gov",
                "866-557-7368",
            ),
            stay_housed_la(),
        ],
    )
}

// ============================================================================
// Westside rent-controlled cities
// ============================================================================

fn santa_monica() -> JurisdictionRecord {
    record(
        City::SantaMonica.id(),
        "Santa Monica",
        true,
        &[
            "Rent Control Charter Amendment covers most units built before April 10, 1979",
            "Just cause required for evictions from controlled units",
            "Permanent relocation fees owed for no-fault evictions",
        ],
        STATE_NOTICE,
        vec![Resource::new(
            "Santa Monica Rent Control Board",
            "https://www.santamonica.gov/rent-control",
        )],
    )
}

fn west_hollywood() -> JurisdictionRecord {
    record(
        City::WestHollywood.id(),
        "West Hollywood",
        true,
        &[
            "Rent Stabilization Ordinance covers most units built before July 1, 1979",
            "Just cause required for all evictions from covered units",
            "Relocation assistance required for no-fault evictions",
        ],
        STATE_NOTICE,
        vec![Resource::new(
            "West Hollywood Rent Stabilization",
            "https://www.weho.org/city-government/rent-stabilization-housing",
        )],
    )
}

fn beverly_hills() -> JurisdictionRecord {
    record(
        City::BeverlyHills.id(),
        "Beverly Hills",
        true,
        &[
            "Rent stabilization (Municipal Code Title 4, Chapters 5 and 6) limits annual increases",
            "Relocation fees owed for no-fault terminations",
        ],
        STATE_NOTICE,
        vec![Resource::new(
            "Beverly Hills Rent Stabilization",
            "https://www.beverlyhills.org/rent",
        )],
    )
}

fn culver_city() -> JurisdictionRecord {
    record(
        City::CulverCity.id(),
        "Culver City",
        true,
        &[
            "Rent Control Ordinance caps annual increases for covered units",
            "Tenant Protections Ordinance requires just cause and relocation assistance",
        ],
        STATE_NOTICE,
        vec![Resource::new(
            "Culver City Rent Control and Tenant Protections",
            "https://www.culvercity.org/rent",
        )],
    )
}

// ============================================================================
// Other rent-stabilized cities
// ============================================================================

fn inglewood() -> JurisdictionRecord {
    record(
        City::Inglewood.id(),
        "Inglewood",
        true,
        &[
            "Housing Protection Ordinance caps annual increases at 5%",
            "Just cause and relocation assistance required for no-fault evictions",
        ],
        STATE_NOTICE,
        vec![Resource::new(
            "Inglewood Housing Protection",
            "https://www.cityofinglewood.org",
        )],
    )
}

fn pasadena() -> JurisdictionRecord {
    record(
        City::Pasadena.id(),
        "Pasadena",
        true,
        &[
            "Measure H rent stabilization covers most units built before February 1995",
            "Just cause required for evictions from covered units",
            "Relocation assistance required for no-fault evictions",
        ],
        STATE_NOTICE,
        vec![Resource::new(
            "Pasadena Rental Housing Board",
            "https://www.cityofpasadena.net/rental-housing-board",
        )],
    )
}

// ============================================================================
// Just cause without rent control
// ============================================================================

fn glendale() -> JurisdictionRecord {
    record(
        City::Glendale.id(),
        "Glendale",
        false,
        &[
            "Just Cause Ordinance limits evictions to enumerated reasons",
            "Relocation assistance required for no-fault evictions and large rent increases",
        ],
        STATE_NOTICE,
        vec![Resource::new(
            "Glendale Rent Stabilization and Tenant Protection",
            "https://www.glendaleca.gov/government/departments/community-development/housing",
        )],
    )
}

fn long_beach() -> JurisdictionRecord {
    record(
        City::LongBeach.id(),
        "Long Beach",
        false,
        &[
            "Tenant Protection Act (AB 1482) just cause applies",
            "Tenant Relocation Assistance Ordinance for no-fault evictions and increases over 10%",
        ],
        STATE_NOTICE,
        vec![Resource::new(
            "Long Beach Renter Resources",
            "https://www.longbeach.gov/lbcd/renters",
        )],
    )
}

// ============================================================================
// LA County (unincorporated)
// ============================================================================

/// County Code Chapters 8.52 and 8.57 (RSTPO)
fn la_county() -> JurisdictionRecord {
    record(
        LA_COUNTY,
        "Los Angeles County (Unincorporated)",
        true,
        &[
            "Rent Stabilization and Tenant Protections Ordinance (RSTPO) covers most units built before February 1995",
            "Just cause required for all tenancies in covered units",
            "Relocation assistance required for no-fault evictions",
        ],
        STATE_NOTICE,
        vec![
            Resource::with_phone(
                "LA County Department of Consumer and Business Affairs",
                "https://dcba.lacounty.gov/rentstabilization",
                "800-593-8222",
            ),
            stay_housed_la(),
        ],
    )
}
