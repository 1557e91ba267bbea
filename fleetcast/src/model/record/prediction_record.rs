use super::{PredictionId, PredictionStatus};
use crate::model::factors::FactorSnapshot;
use crate::model::fleet::{BusId, RouteId, StopNumber};
use chrono::NaiveDateTime;
use geo::Point;
use serde::{Deserialize, Serialize};

/// one arrival prediction for a (bus, route, stop) key. created per
/// prediction request, never upserted; reconciled against the observed
/// arrival at most once in normal operation, and never deleted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub id: PredictionId,
    pub bus_id: BusId,
    pub route_id: RouteId,
    pub stop_number: StopNumber,
    /// lon,lat of the bus when the prediction was made
    pub location: Point<f64>,
    pub created_at: NaiveDateTime,
    pub predicted_arrival: NaiveDateTime,
    pub actual_arrival: Option<NaiveDateTime>,
    /// 0-100, set when the actual arrival is reconciled
    pub accuracy: Option<u8>,
    pub factors: FactorSnapshot,
    pub status: PredictionStatus,
}

impl PredictionRecord {
    /// minutes from creation to the recorded actual arrival, once known.
    /// feeds the historical base time for later predictions on the same
    /// (bus, route) pair.
    pub fn travel_minutes(&self) -> Option<f64> {
        self.actual_arrival
            .map(|actual| (actual - self.created_at).num_milliseconds() as f64 / 60_000.0)
    }
}
