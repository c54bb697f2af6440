//! Configuration for the rights lookup CLI
//!
//! Settings come from an optional TOML file; command-line flags override it.
//! Every field has a default, so an empty file (or no file) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use geocoder::NominatimConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Dataset locations
    #[serde(default)]
    pub data: DataConfig,
    /// Geocoding service settings
    #[serde(default)]
    pub geocoder: NominatimConfig,
}

impl LookupConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// Paths to the static datasets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// GeoJSON feature collection of jurisdiction boundaries
    #[serde(default = "default_boundaries_path")]
    pub boundaries_path: PathBuf,
    /// JSON object of rights records keyed by jurisdiction id
    #[serde(default = "default_rights_path")]
    pub rights_path: PathBuf,
}

fn default_boundaries_path() -> PathBuf {
    PathBuf::from("data/la_boundaries.geojson")
}

fn default_rights_path() -> PathBuf {
    PathBuf::from("data/address_data.json")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            boundaries_path: default_boundaries_path(),
            rights_path: default_rights_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LookupConfig::from_str("").unwrap();

        assert_eq!(config, LookupConfig::default());
        assert_eq!(
            config.data.boundaries_path,
            PathBuf::from("data/la_boundaries.geojson")
        );
        assert_eq!(config.geocoder.min_interval_ms, 1000);
        assert_eq!(config.geocoder.timeout_secs, 10);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let toml = r#"
            [data]
            rights_path = "/srv/rights.json"

            [geocoder]
            base_url = "http://localhost:8080"
            timeout_secs = 3
        "#;

        let config = LookupConfig::from_str(toml).unwrap();

        assert_eq!(config.data.rights_path, PathBuf::from("/srv/rights.json"));
        assert_eq!(
            config.data.boundaries_path,
            PathBuf::from("data/la_boundaries.geojson")
        );
        assert_eq!(config.geocoder.base_url, "http://localhost:8080");
        assert_eq!(config.geocoder.timeout_secs, 3);
        assert_eq!(config.geocoder.country_codes, "us");
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(LookupConfig::from_str("[data\nrights_path = 1").is_err());
        assert!(LookupConfig::from_str("[geocoder]\ntimeout_secs = \"ten\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[geocoder]\nmin_interval_ms = 1500").unwrap();

        let config = LookupConfig::from_file(file.path()).unwrap();

        assert_eq!(config.geocoder.min_interval_ms, 1500);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LookupConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
