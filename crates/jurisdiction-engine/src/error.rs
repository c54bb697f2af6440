//! Error types for dataset loading

use std::path::PathBuf;

use thiserror::Error;

/// Dataset loading errors
///
/// Stores degrade on these (empty dataset); the strict loaders surface them.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not a feature collection", .0.display())]
    NotFeatureCollection(PathBuf),

    #[error("{} is not a JSON object keyed by jurisdiction id", .0.display())]
    NotKeyedObject(PathBuf),

    #[error("Invalid geometry: {0}")]
    Geometry(String),
}

impl DataError {
    /// True when the underlying file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
