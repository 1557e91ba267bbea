use super::{MemoryStore, PredictionStore, RecordFilter, StoreError};
use crate::model::record::{PredictionId, PredictionRecord};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// document-store stand-in for the cli: a JSON file of prediction records,
/// loaded in full at open and written back on save.
pub struct JsonFileStore {
    path: PathBuf,
    store: MemoryStore,
}

impl JsonFileStore {
    /// opens the records file, or starts empty when it does not exist yet
    pub fn open(path: &Path) -> Result<JsonFileStore, StoreError> {
        if !path.exists() {
            return Ok(JsonFileStore {
                path: path.to_path_buf(),
                store: MemoryStore::new(),
            });
        }
        let file = File::open(path).map_err(|e| StoreError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let records: Vec<PredictionRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StoreError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        log::debug!("loaded {} records from '{}'", records.len(), path.display());
        Ok(JsonFileStore {
            path: path.to_path_buf(),
            store: MemoryStore::with_records(records),
        })
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let file = File::create(&self.path).map_err(|e| StoreError::WriteError {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self.store.records()).map_err(|e| {
            StoreError::WriteError {
                path: self.path.display().to_string(),
                message: e.to_string(),
            }
        })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl PredictionStore for JsonFileStore {
    fn insert(&mut self, record: PredictionRecord) -> Result<PredictionRecord, StoreError> {
        self.store.insert(record)
    }

    fn get(&self, id: &PredictionId) -> Result<PredictionRecord, StoreError> {
        self.store.get(id)
    }

    fn update(&mut self, record: &PredictionRecord) -> Result<(), StoreError> {
        self.store.update(record)
    }

    fn query(&self, filter: &RecordFilter) -> Vec<PredictionRecord> {
        self.store.query(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::JsonFileStore;
    use crate::model::factors::{FactorSnapshot, TrafficLevel, WeatherCondition};
    use crate::model::fleet::{BusId, RouteId, StopNumber};
    use crate::model::record::{PredictionId, PredictionRecord, PredictionStatus};
    use crate::store::PredictionStore;
    use chrono::{Duration, NaiveDateTime};
    use geo::Point;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fleetcast-{}-{}.json", name, std::process::id()))
    }

    fn record() -> PredictionRecord {
        let created_at =
            NaiveDateTime::parse_from_str("2024-03-20 13:00:00", "%Y-%m-%d %H:%M:%S")
                .expect("failed to parse test datetime");
        PredictionRecord {
            id: PredictionId::UNASSIGNED,
            bus_id: BusId::from("bus-1"),
            route_id: RouteId::from("route-1"),
            stop_number: StopNumber(1),
            location: Point::new(-104.99, 39.74),
            created_at,
            predicted_arrival: created_at + Duration::minutes(30),
            actual_arrival: None,
            accuracy: None,
            factors: FactorSnapshot::from_update(
                TrafficLevel::Medium,
                WeatherCondition::Clear,
                30.0,
                5.0,
                &created_at,
            ),
            status: PredictionStatus::Pending,
        }
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let path = scratch_path("missing");
        let store = JsonFileStore::open(&path).expect("open should succeed");
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let path = scratch_path("roundtrip");
        let mut store = JsonFileStore::open(&path).expect("open should succeed");
        let stored = store.insert(record()).expect("insert should succeed");
        store.save().expect("save should succeed");

        let reloaded = JsonFileStore::open(&path).expect("reopen should succeed");
        assert_eq!(reloaded.len(), 1);
        assert_eq!(
            reloaded.get(&stored.id).expect("record should exist"),
            stored
        );
        std::fs::remove_file(&path).expect("failed to clean up scratch file");
    }
}
