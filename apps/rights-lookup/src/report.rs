//! Console report for the built-in demo addresses

use jurisdiction_engine::LookupEngine;
use shared_types::{Geocoder, LookupResult};

/// Sample addresses across the county's jurisdictions
pub const DEMO_ADDRESSES: &[&str] = &[
    "1200 W 7th St, Los Angeles, CA 90017",       // LA City (Downtown)
    "411 W Ocean Blvd, Long Beach, CA 90802",     // Long Beach
    "613 E Broadway, Glendale, CA 91206",         // Glendale
    "100 N Garfield Ave, Pasadena, CA 91101",     // Pasadena
    "3250 Wilshire Blvd, Los Angeles, CA 90010",  // LA City (Koreatown)
    "1000 Vin Scully Ave, Los Angeles, CA 90012", // LA City (Dodger Stadium)
    "4801 Whittier Blvd, East Los Angeles, CA",   // Unincorporated (East LA)
];

const RULE: &str = "----------------------------------------";

/// Report lines for one lookup
pub fn summarize(result: &LookupResult) -> Vec<String> {
    let mut lines = vec![format!("Address: {}", result.input)];

    match (&result.jurisdiction, &result.rights) {
        (Some(jurisdiction), Some(rights)) if result.success => {
            lines.push(format!(
                "  OK   {} ({})",
                jurisdiction.display_name, jurisdiction.id
            ));
            lines.push(format!("  Rights: {}", rights.display_name));
            lines.push(format!(
                "  Rent control: {} | Just cause: {}",
                yes_no(rights.rent_control),
                yes_no(rights.just_cause_required)
            ));
            lines.push(format!("  Notice: {}", rights.notice_requirement));
            if let Some(note) = &rights.note {
                lines.push(format!("  Note: {}", note));
            }
        }
        _ => {
            lines.push(format!(
                "  FAIL {}",
                result.error.as_deref().unwrap_or("Unknown error")
            ));
        }
    }

    lines
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Look up every demo address and print a summary for each
pub fn run_demo<G: Geocoder>(engine: &LookupEngine<G>) {
    println!("{}", "=".repeat(60));
    println!("Tenant Rights Lookup - Jurisdiction Demo");
    println!("{}", "=".repeat(60));

    for address in DEMO_ADDRESSES {
        let result = engine.lookup(address);
        for line in summarize(&result) {
            println!("{}", line);
        }
        println!("{}", RULE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Coordinates, JurisdictionRecord, JurisdictionSummary};

    fn resolved() -> LookupResult {
        LookupResult::resolved(
            "200 N Spring St",
            Coordinates::new(34.0537, -118.2428).unwrap(),
            "Los Angeles City Hall".to_string(),
            JurisdictionSummary {
                id: "los_angeles_city".to_string(),
                display_name: "Los Angeles".to_string(),
                area_type: "CITY".to_string(),
            },
            JurisdictionRecord {
                id: "los_angeles_city".to_string(),
                display_name: "Los Angeles (City)".to_string(),
                rent_control: true,
                just_cause_required: true,
                protections: vec!["RSO".to_string()],
                notice_requirement: "30/60-day notice".to_string(),
                resources: Vec::new(),
                note: None,
            },
        )
    }

    #[test]
    fn test_summarize_success() {
        assert_eq!(
            summarize(&resolved()),
            vec![
                "Address: 200 N Spring St",
                "  OK   Los Angeles (los_angeles_city)",
                "  Rights: Los Angeles (City)",
                "  Rent control: Yes | Just cause: Yes",
                "  Notice: 30/60-day notice",
            ]
        );
    }

    #[test]
    fn test_summarize_includes_note() {
        let mut result = resolved();
        if let Some(rights) = result.rights.as_mut() {
            rights.note = Some("Showing CA state minimums.".to_string());
        }

        let lines = summarize(&result);

        assert_eq!(lines.last().unwrap(), "  Note: Showing CA state minimums.");
    }

    #[test]
    fn test_summarize_failure() {
        let result = LookupResult::failure("nowhere", "Could not geocode address.");

        assert_eq!(
            summarize(&result),
            vec!["Address: nowhere", "  FAIL Could not geocode address."]
        );
    }
}
