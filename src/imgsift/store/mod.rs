//! # Record Storage
//!
//! The engine never loads records itself: it is handed a fully materialized
//! collection per pass. The [`RecordStore`] trait is where that collection
//! comes from, so the API layer can run against different backends.
//!
//! ## Implementations
//!
//! - [`fs::CatalogFile`]: a JSON catalog on disk
//!   - Either a JSON array of records or `{ "records": [...] }`
//!   - Attribute keys use the dashed gallery naming (`make-model`, `top-colors`)
//!   - Missing keys take their documented defaults
//!
//! - [`memory::InMemoryStore`]: vector-backed store for testing
//!
//! ## Discovery Order
//!
//! Stores return records in catalog order. That order is the *discovery order*
//! that stable sorting preserves for equal keys, so implementations must not
//! reorder records.

use crate::error::{ImgsiftError, Result};
use crate::model::MediaRecord;

pub mod fs;
pub mod memory;

/// Read-only source of media records.
pub trait RecordStore {
    /// All records, in discovery order
    fn list_records(&self) -> Result<Vec<MediaRecord>>;

    /// The first record with the given id
    fn get_record(&self, id: &str) -> Result<MediaRecord> {
        self.list_records()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| ImgsiftError::RecordNotFound(id.to_string()))
    }
}
