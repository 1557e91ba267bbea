use super::{ServiceError, TripUpdate};
use crate::model::factors::FactorSnapshot;
use crate::model::fleet::{BusId, RouteId};
use crate::model::history_ops;
use crate::model::prediction::{prediction_ops, PredictorConfig};
use crate::model::record::{PredictionId, PredictionRecord, PredictionStatus};
use crate::model::validate;
use crate::store::{FleetRegistry, PredictionStore, RecordFilter};
use chrono::NaiveDateTime;
use itertools::Itertools;

/// validates a trip update, resolves its references, and computes the
/// prediction record without persisting it. safe to call concurrently;
/// each invocation reads only its own inputs.
pub fn build_record(
    store: &impl PredictionStore,
    fleet: &impl FleetRegistry,
    config: &PredictorConfig,
    update: &TripUpdate,
    now: NaiveDateTime,
) -> Result<PredictionRecord, ServiceError> {
    validate::validate_trip_update(update.speed_kmh, update.distance_to_stop_km)?;
    fleet
        .bus(&update.bus_id)
        .ok_or_else(|| ServiceError::BusNotFound(update.bus_id.clone()))?;
    fleet
        .route(&update.route_id)
        .ok_or_else(|| ServiceError::RouteNotFound(update.route_id.clone()))?;

    let base_minutes = base_minutes(store, config, &update.bus_id, &update.route_id);
    let snapshot = FactorSnapshot::from_update(
        update.traffic,
        update.weather,
        update.speed_kmh,
        update.distance_to_stop_km,
        &now,
    );
    let predicted_arrival =
        prediction_ops::predict_arrival(&now, base_minutes, &snapshot, &config.adjustments);

    Ok(PredictionRecord {
        id: PredictionId::UNASSIGNED,
        bus_id: update.bus_id.clone(),
        route_id: update.route_id.clone(),
        stop_number: update.stop_number,
        location: update.location,
        created_at: now,
        predicted_arrival,
        actual_arrival: None,
        accuracy: None,
        factors: snapshot,
        status: PredictionStatus::Pending,
    })
}

/// builds and persists a Pending prediction for the update's target stop
pub fn generate(
    store: &mut impl PredictionStore,
    fleet: &impl FleetRegistry,
    config: &PredictorConfig,
    update: &TripUpdate,
    now: NaiveDateTime,
) -> Result<PredictionRecord, ServiceError> {
    let record = build_record(&*store, fleet, config, update, now)?;
    let stored = store.insert(record)?;
    log::debug!(
        "prediction {} for bus {} route {} stop {}: arrival {}",
        stored.id,
        stored.bus_id,
        stored.route_id,
        stored.stop_number,
        stored.predicted_arrival
    );
    Ok(stored)
}

/// historical mean travel time for the (bus, route) pair when reconciled
/// records exist, else the configured default base
fn base_minutes(
    store: &impl PredictionStore,
    config: &PredictorConfig,
    bus_id: &BusId,
    route_id: &RouteId,
) -> f64 {
    let filter = RecordFilter {
        bus_id: Some(bus_id.clone()),
        route_id: Some(route_id.clone()),
        ..Default::default()
    };
    let durations = store
        .query(&filter)
        .iter()
        .filter_map(|r| r.travel_minutes())
        .collect_vec();
    history_ops::mean_travel_minutes(&durations).unwrap_or(config.default_base_minutes)
}
