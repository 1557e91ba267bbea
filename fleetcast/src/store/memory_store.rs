use super::{PredictionStore, RecordFilter, StoreError};
use crate::model::record::{PredictionId, PredictionRecord};
use itertools::Itertools;

/// in-process store used by tests and as the working set of the cli
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<PredictionRecord>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// wraps an existing record set, continuing id assignment past the
    /// highest id present
    pub fn with_records(records: Vec<PredictionRecord>) -> MemoryStore {
        let next_id = records.iter().map(|r| r.id.0).max().unwrap_or(0);
        MemoryStore { records, next_id }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }
}

impl PredictionStore for MemoryStore {
    fn insert(&mut self, record: PredictionRecord) -> Result<PredictionRecord, StoreError> {
        self.next_id += 1;
        let stored = PredictionRecord {
            id: PredictionId(self.next_id),
            ..record
        };
        self.records.push(stored.clone());
        Ok(stored)
    }

    fn get(&self, id: &PredictionId) -> Result<PredictionRecord, StoreError> {
        self.records
            .iter()
            .find(|r| r.id == *id)
            .cloned()
            .ok_or(StoreError::PredictionNotFound(*id))
    }

    fn update(&mut self, record: &PredictionRecord) -> Result<(), StoreError> {
        let position = self
            .records
            .iter()
            .position(|r| r.id == record.id)
            .ok_or(StoreError::PredictionNotFound(record.id))?;
        self.records[position] = record.clone();
        Ok(())
    }

    fn query(&self, filter: &RecordFilter) -> Vec<PredictionRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect_vec()
    }
}
