use crate::model::fleet::{BusId, RouteId, StopNumber};
use crate::model::record::PredictionRecord;
use chrono::NaiveDateTime;

/// conjunctive predicate over prediction records used by store queries.
/// None matches everything; the creation window is inclusive of `from` and
/// exclusive of `until`.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub created_from: Option<NaiveDateTime>,
    pub created_until: Option<NaiveDateTime>,
    pub bus_id: Option<BusId>,
    pub route_id: Option<RouteId>,
    pub stop_number: Option<StopNumber>,
    /// restrict to predictions still awaiting their arrival
    pub open_only: bool,
}

impl RecordFilter {
    pub fn matches(&self, record: &PredictionRecord) -> bool {
        if let Some(from) = self.created_from {
            if record.created_at < from {
                return false;
            }
        }
        if let Some(until) = self.created_until {
            if record.created_at >= until {
                return false;
            }
        }
        if let Some(bus_id) = &self.bus_id {
            if &record.bus_id != bus_id {
                return false;
            }
        }
        if let Some(route_id) = &self.route_id {
            if &record.route_id != route_id {
                return false;
            }
        }
        if let Some(stop_number) = &self.stop_number {
            if &record.stop_number != stop_number {
                return false;
            }
        }
        if self.open_only && !record.status.is_open() {
            return false;
        }
        true
    }
}
