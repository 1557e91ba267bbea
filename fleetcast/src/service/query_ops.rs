use crate::model::analytics::{analytics_ops, AccuracyReport};
use crate::model::fleet::{RouteId, StopNumber};
use crate::model::record::PredictionRecord;
use crate::store::{PredictionStore, RecordFilter};
use chrono::NaiveDateTime;
use itertools::Itertools;

/// open predictions for a stop with a predicted arrival at or after `now`,
/// soonest first. this is the read side polled by clients waiting at the
/// stop.
pub fn next_arrivals(
    store: &impl PredictionStore,
    stop_number: StopNumber,
    route_id: Option<RouteId>,
    now: NaiveDateTime,
    limit: usize,
) -> Vec<PredictionRecord> {
    let filter = RecordFilter {
        stop_number: Some(stop_number),
        route_id,
        open_only: true,
        ..Default::default()
    };
    let mut upcoming = store
        .query(&filter)
        .into_iter()
        .filter(|r| r.predicted_arrival >= now)
        .collect_vec();
    upcoming.sort_by_key(|r| r.predicted_arrival);
    upcoming.truncate(limit);
    upcoming
}

/// windowed accuracy aggregation over persisted records
pub fn accuracy_analytics(
    store: &impl PredictionStore,
    filter: &RecordFilter,
    accurate_threshold: u8,
) -> AccuracyReport {
    let records = store.query(filter);
    analytics_ops::accuracy_report(&records, accurate_threshold)
}
