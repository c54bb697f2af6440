//! Tenant Rights Lookup CLI
//!
//! Resolves a street address to its Los Angeles County jurisdiction and prints
//! the tenant-protection rules that apply there as JSON.
//!
//! ## Usage
//!
//! ```text
//! rights-lookup 200 N Spring St, Los Angeles, CA 90012
//! rights-lookup --config lookup.toml "4801 Whittier Blvd, East Los Angeles"
//! rights-lookup            # demo run over sample addresses
//! ```
//!
//! Lookup failures are reported in the JSON envelope (`success: false`) and
//! exit 0. Configuration and internal errors exit non-zero.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use geocoder::NominatimGeocoder;
use jurisdiction_engine::{BoundaryStore, LookupEngine, RightsStore};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod report;

use config::LookupConfig;

/// Command-line arguments for the rights lookup
#[derive(Parser, Debug)]
#[command(name = "rights-lookup")]
#[command(
    version,
    about = "Look up tenant eviction protections for a street address"
)]
struct Args {
    /// Street address (words are joined with spaces); omit for a demo run
    address: Vec<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Boundary GeoJSON file (overrides config)
    #[arg(long)]
    boundaries: Option<PathBuf>,

    /// Rights JSON file (overrides config)
    #[arg(long)]
    rights: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// File configuration with command-line overrides applied
    fn resolve_config(&self) -> anyhow::Result<LookupConfig> {
        let mut config = match &self.config {
            Some(path) => LookupConfig::from_file(path)?,
            None => LookupConfig::default(),
        };

        if let Some(path) = &self.boundaries {
            config.data.boundaries_path = path.clone();
        }
        if let Some(path) = &self.rights {
            config.data.rights_path = path.clone();
        }

        Ok(config)
    }

    /// Joined address, or `None` when no address argument was given
    ///
    /// A blank argument is still an address; the engine reports it as a
    /// geocoding failure.
    fn address(&self) -> Option<String> {
        (!self.address.is_empty()).then(|| self.address.join(" "))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the JSON result
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args.resolve_config()?;
    info!(
        "Boundaries: {}, rights: {}",
        config.data.boundaries_path.display(),
        config.data.rights_path.display()
    );

    let geocoder = NominatimGeocoder::new(config.geocoder.clone())
        .context("Failed to initialize geocoder")?;
    let engine = LookupEngine::new(
        geocoder,
        BoundaryStore::from_path(&config.data.boundaries_path),
        RightsStore::from_path(&config.data.rights_path),
    );

    match args.address() {
        Some(address) => {
            info!("Looking up: {}", address);
            let result = engine.lookup(&address);
            let json =
                serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
            println!("{}", json);
        }
        None => report::run_demo(&engine),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_address_words_are_joined() {
        let args = Args::parse_from(["rights-lookup", "200", "N", "Spring", "St,", "LA"]);
        assert_eq!(args.address().as_deref(), Some("200 N Spring St, LA"));
    }

    #[test]
    fn test_no_address_means_demo() {
        let args = Args::parse_from(["rights-lookup", "--verbose"]);
        assert!(args.verbose);
        assert_eq!(args.address(), None);

    }

    #[test]
    fn test_blank_address_is_not_demo() {
        let blank = Args::parse_from(["rights-lookup", "  "]);
        assert_eq!(blank.address().as_deref(), Some("  "));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[data]\nboundaries_path = \"a.geojson\"\nrights_path = \"a.json\""
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap();

        let args = Args::parse_from([
            "rights-lookup",
            "--config",
            config_path,
            "--rights",
            "b.json",
            "City Hall",
        ]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config.data.boundaries_path, PathBuf::from("a.geojson"));
        assert_eq!(config.data.rights_path, PathBuf::from("b.json"));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let args = Args::parse_from(["rights-lookup", "--config", "/nonexistent/lookup.toml"]);
        assert!(args.resolve_config().is_err());
    }
}
