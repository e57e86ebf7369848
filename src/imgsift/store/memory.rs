use super::RecordStore;
use crate::error::Result;
use crate::model::MediaRecord;

/// Vector-backed store. Insertion order is discovery order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    records: Vec<MediaRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<MediaRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: MediaRecord) {
        self.records.push(record);
    }
}

impl RecordStore for InMemoryStore {
    fn list_records(&self) -> Result<Vec<MediaRecord>> {
        Ok(self.records.clone())
    }
}
