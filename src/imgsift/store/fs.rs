use super::RecordStore;
use crate::error::{ImgsiftError, Result};
use crate::model::MediaRecord;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// A JSON catalog on disk, re-read on every listing.
pub struct CatalogFile {
    path: PathBuf,
}

/// Accepted top-level shapes of a catalog.
#[derive(Deserialize)]
#[serde(untagged)]
enum Catalog {
    Bare(Vec<MediaRecord>),
    Wrapped { records: Vec<MediaRecord> },
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for CatalogFile {
    fn list_records(&self) -> Result<Vec<MediaRecord>> {
        if !self.path.exists() {
            return Err(ImgsiftError::Store(format!(
                "Catalog not found: {}",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path).map_err(ImgsiftError::Io)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(ImgsiftError::Serialization)?;
        let records = match catalog {
            Catalog::Bare(records) => records,
            Catalog::Wrapped { records } => records,
        };
        debug!(
            target: "imgsift::store",
            path = %self.path.display(),
            count = records.len(),
            "loaded catalog"
        );
        Ok(records)
    }
}
