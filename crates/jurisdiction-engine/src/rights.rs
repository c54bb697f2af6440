//! Rights Loader and Rights Resolver
//!
//! The rights dataset is a JSON object keyed by jurisdiction id. Resolution
//! walks an ordered fallback chain so every id, including garbage, yields a
//! usable record:
//! 1. Dataset entry for the exact id
//! 2. Built-in local record ([`crate::layers::local`])
//! 3. Dataset's statewide entry, annotated as unverified
//! 4. Hard-coded statewide minimum ([`crate::layers::state`])

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use once_cell::sync::OnceCell;
use regex::Regex;
use serde_json::Value;
use shared_types::JurisdictionRecord;
use tracing::{debug, error, info, warn};

use crate::error::DataError;
use crate::jurisdiction::CALIFORNIA_STATEWIDE;
use crate::layers::{local_record, statewide_minimum, STATEWIDE_DATASET_NOTE};

lazy_static! {
    /// Canonical jurisdiction id: lowercase snake_case
    static ref JURISDICTION_ID_PATTERN: Regex = Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").unwrap();
}

/// Rights dataset keyed by jurisdiction id
pub type RightsTable = HashMap<String, JurisdictionRecord>;

/// True for lowercase snake_case ids such as `los_angeles_city`
pub fn is_canonical_id(id: &str) -> bool {
    JURISDICTION_ID_PATTERN.is_match(id)
}

/// Validate one dataset entry, filling its id from the key
fn parse_entry(key: &str, value: Value) -> Result<JurisdictionRecord, String> {
    if !is_canonical_id(key) {
        return Err("key is not a lowercase snake_case id".to_string());
    }

    let mut record: JurisdictionRecord = serde_json::from_value(value).map_err(|e| e.to_string())?;

    if record.id.is_empty() {
        record.id = key.to_string();
    } else if record.id != key {
        warn!(key = %key, id = %record.id, "Record id differs from its key; using key");
        record.id = key.to_string();
    }
    if record.display_name.trim().is_empty() {
        return Err("display_name is empty".to_string());
    }
    if record.notice_requirement.trim().is_empty() {
        return Err("notice_requirement is empty".to_string());
    }
    if record.protections.is_empty() && record.resources.is_empty() {
        return Err("record lists no protections or resources".to_string());
    }

    Ok(record)
}

/// Parse a rights dataset, skipping entries that fail validation
pub fn parse_rights(path: &Path, data: Value) -> Result<RightsTable, DataError> {
    let Value::Object(entries) = data else {
        return Err(DataError::NotKeyedObject(path.to_path_buf()));
    };

    let mut table = RightsTable::with_capacity(entries.len());
    for (key, value) in entries {
        match parse_entry(&key, value) {
            Ok(record) => {
                table.insert(key, record);
            }
            Err(reason) => warn!(key = %key, "Skipping rights entry: {}", reason),
        }
    }

    Ok(table)
}

/// Load a rights dataset, surfacing every failure
pub fn load_rights(path: &Path) -> Result<RightsTable, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data: Value = serde_json::from_str(&content).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    parse_rights(path, data)
}

/// Load-once owner of the rights dataset
#[derive(Debug)]
pub struct RightsStore {
    source: Option<PathBuf>,
    table: OnceCell<RightsTable>,
}

impl RightsStore {
    /// Store that reads `path` on first use
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            table: OnceCell::new(),
        }
    }

    /// Store pre-populated with in-memory records
    pub fn from_table(table: RightsTable) -> Self {
        Self {
            source: None,
            table: OnceCell::with_value(table),
        }
    }

    /// Store with no dataset; resolution relies on the built-in layers
    pub fn empty() -> Self {
        Self::from_table(RightsTable::new())
    }

    /// Load the dataset if needed and return it
    pub fn ensure_loaded(&self) -> &RightsTable {
        self.table.get_or_init(|| match &self.source {
            Some(path) => load_or_empty(path),
            None => RightsTable::new(),
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }
}

fn load_or_empty(path: &Path) -> RightsTable {
    match load_rights(path) {
        Ok(table) => {
            info!("Loaded {} jurisdiction rights records", table.len());
            table
        }
        Err(e) if e.is_not_found() => {
            warn!("Rights file not found: {}", path.display());
            RightsTable::new()
        }
        Err(e) => {
            error!("Ignoring rights dataset: {}", e);
            RightsTable::new()
        }
    }
}

/// Which tier of the fallback chain produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightsSource {
    /// Exact entry in the rights dataset
    Dataset,
    /// Built-in local ordinance record
    LocalDefault,
    /// Dataset's statewide entry standing in for an unverified jurisdiction
    StatewideDataset,
    /// Hard-coded statewide minimum
    StatewideMinimum,
}

/// A resolved record and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct RightsResolution {
    pub record: JurisdictionRecord,
    pub source: RightsSource,
}

/// Total mapping from jurisdiction id to rights record
#[derive(Debug)]
pub struct RightsResolver {
    store: RightsStore,
}

impl RightsResolver {
    pub fn new(store: RightsStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RightsStore {
        &self.store
    }

    /// Resolve `id` through the fallback chain; never fails
    pub fn resolve(&self, id: &str) -> RightsResolution {
        let table = self.store.ensure_loaded();

        let resolution = if let Some(record) = table.get(id) {
            RightsResolution {
                record: record.clone(),
                source: RightsSource::Dataset,
            }
        } else if let Some(record) = local_record(id) {
            RightsResolution {
                record,
                source: RightsSource::LocalDefault,
            }
        } else if let Some(record) = table.get(CALIFORNIA_STATEWIDE) {
            RightsResolution {
                record: record.annotated(STATEWIDE_DATASET_NOTE),
                source: RightsSource::StatewideDataset,
            }
        } else {
            RightsResolution {
                record: statewide_minimum(),
                source: RightsSource::StatewideMinimum,
            }
        };

        debug!(id = %id, source = ?resolution.source, "Resolved jurisdiction rights");
        resolution
    }

    /// Resolve `id` and return only the record
    pub fn rights_for(&self, id: &str) -> JurisdictionRecord {
        self.resolve(id).record
    }
}

impl Default for RightsResolver {
    fn default() -> Self {
        Self::new(RightsStore::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::STATEWIDE_MINIMUM_NOTE;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;
    use std::io::Write;

    fn dataset() -> Value {
        json!({
            "los_angeles_city": {
                "name": "Los Angeles (City) - dataset",
                "rent_control": true,
                "just_cause": true,
                "key_rights": ["RSO"],
                "notice_requirements": "Dataset notice",
                "resources": []
            },
            "torrance": {
                "display_name": "Torrance",
                "rent_control": false,
                "just_cause_required": true,
                "protections": ["AB 1482"],
                "notice_requirement": "60-day notice"
            },
            "california_statewide": {
                "name": "California (Statewide) - dataset",
                "rent_control": false,
                "just_cause": true,
                "protections": ["AB 1482 applies"],
                "notice_requirements": "Statewide dataset notice"
            }
        })
    }

    fn resolver_with(data: Value) -> RightsResolver {
        let table = parse_rights(Path::new("rights.json"), data).unwrap();
        RightsResolver::new(RightsStore::from_table(table))
    }

    #[test]
    fn test_exact_match_returned_as_is() {
        let resolver = resolver_with(dataset());

        let resolution = resolver.resolve("los_angeles_city");

        assert_eq!(resolution.source, RightsSource::Dataset);
        assert_eq!(resolution.record.display_name, "Los Angeles (City) - dataset");
        assert_eq!(resolution.record.id, "los_angeles_city");
        assert_eq!(resolution.record.note, None);
    }

    #[test]
    fn test_local_layer_fills_dataset_gaps() {
        let resolver = resolver_with(dataset());

        let resolution = resolver.resolve("santa_monica");

        assert_eq!(resolution.source, RightsSource::LocalDefault);
        assert!(resolution.record.rent_control);
    }

    #[test]
    fn test_statewide_dataset_entry_is_annotated() {
        let resolver = resolver_with(dataset());

        let resolution = resolver.resolve("lancaster");

        assert_eq!(resolution.source, RightsSource::StatewideDataset);
        assert_eq!(resolution.record.display_name, "California (Statewide) - dataset");
        assert_eq!(resolution.record.note.as_deref(), Some(STATEWIDE_DATASET_NOTE));
    }

    #[test]
    fn test_statewide_minimum_without_dataset() {
        let resolver = RightsResolver::default();

        let resolution = resolver.resolve("lancaster");

        assert_eq!(resolution.source, RightsSource::StatewideMinimum);
        assert_eq!(resolution.record.note.as_deref(), Some(STATEWIDE_MINIMUM_NOTE));
        assert!(!resolution.record.rent_control);
        assert!(resolution.record.just_cause_required);
    }

    #[test]
    fn test_statewide_id_without_dataset_uses_minimum() {
        let resolver = RightsResolver::default();

        assert_eq!(
            resolver.resolve(CALIFORNIA_STATEWIDE).source,
            RightsSource::StatewideMinimum
        );
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let data = json!({
            "Bad Key": {"name": "x", "notice_requirements": "n", "protections": ["p"]},
            "no_notice": {"name": "x", "protections": ["p"]},
            "blank_notice": {"name": "x", "notice_requirements": "  ", "protections": ["p"]},
            "nothing_listed": {"name": "x", "notice_requirements": "n"},
            "not_an_object": 42,
            "mismatched": {"id": "other", "name": "Mismatched", "notice_requirements": "n", "protections": ["p"]}
        });

        let table = parse_rights(Path::new("rights.json"), data).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table["mismatched"].id, "mismatched");
    }

    #[test]
    fn test_mixed_field_names_stay_in_dataset_tier() {
        let resolver = resolver_with(json!({
            "glendale": {
                "name": "Glendale",
                "display_name": "Glendale (dataset)",
                "notice_requirement": "n",
                "notice_requirements": "legacy n",
                "protections": ["p"]
            }
        }));

        let resolution = resolver.resolve("glendale");

        assert_eq!(resolution.source, RightsSource::Dataset);
        assert_eq!(resolution.record.display_name, "Glendale (dataset)");
        assert_eq!(resolution.record.notice_requirement, "n");
    }

    #[test]
    fn test_non_object_dataset_rejected() {
        let result = parse_rights(Path::new("rights.json"), json!([1, 2, 3]));
        assert!(matches!(result, Err(DataError::NotKeyedObject(_))));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = RightsStore::from_path(dir.path().join("address_data.json"));

        assert!(store.ensure_loaded().is_empty());
    }

    #[test]
    fn test_store_reads_file_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", dataset()).unwrap();

        let store = RightsStore::from_path(file.path());
        let first = store.ensure_loaded().clone();
        std::fs::write(file.path(), "{}").unwrap();
        let second = store.ensure_loaded();

        assert_eq!(&first, second);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn test_canonical_ids() {
        assert!(is_canonical_id("los_angeles_city"));
        assert!(is_canonical_id("la_county"));
        assert!(!is_canonical_id("LA_COUNTY"));
        assert!(!is_canonical_id("la county"));
        assert!(!is_canonical_id("_la"));
        assert!(!is_canonical_id(""));
    }

    proptest! {
        /// Property: resolution is total and always usable
        #[test]
        fn resolution_is_total(id in ".{0,40}", with_dataset in any::<bool>()) {
            let resolver = if with_dataset {
                resolver_with(dataset())
            } else {
                RightsResolver::default()
            };

            let record = resolver.rights_for(&id);

            prop_assert!(!record.notice_requirement.is_empty());
            prop_assert!(!record.protections.is_empty() || !record.resources.is_empty());
            prop_assert!(!record.display_name.is_empty());
        }
    }
}
