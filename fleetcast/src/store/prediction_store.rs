use super::{RecordFilter, StoreError};
use crate::model::record::{PredictionId, PredictionRecord};

/// persistence contract for prediction records. the document database is an
/// external collaborator; the prediction subsystem reaches it only through
/// this trait, and imposes no ordering between concurrent predictions for
/// the same (bus, route, stop) key.
pub trait PredictionStore {
    /// persists a new record and returns the stored copy. the store assigns
    /// the id; the value on the incoming record is ignored.
    fn insert(&mut self, record: PredictionRecord) -> Result<PredictionRecord, StoreError>;

    fn get(&self, id: &PredictionId) -> Result<PredictionRecord, StoreError>;

    /// replaces the stored record carrying the same id
    fn update(&mut self, record: &PredictionRecord) -> Result<(), StoreError>;

    /// every record matching the filter, in insertion order
    fn query(&self, filter: &RecordFilter) -> Vec<PredictionRecord>;
}
