use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// store-assigned identity of a prediction record. the domain key
/// (bus, route, stop) is not unique: records for the same key coexist,
/// one per prediction request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PredictionId(pub u64);

impl PredictionId {
    /// placeholder on records not yet persisted; replaced at insert
    pub const UNASSIGNED: PredictionId = PredictionId(0);
}

impl Display for PredictionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
