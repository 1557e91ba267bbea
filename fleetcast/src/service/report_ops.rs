use crate::model::prediction::accuracy_ops;
use crate::model::record::{PredictionId, PredictionRecord, PredictionStatus};
use crate::store::{PredictionStore, StoreError};
use chrono::NaiveDateTime;

/// records the observed arrival for a prediction, scores it, and marks the
/// record Arrived. a repeat call overwrites the previously recorded arrival
/// and score.
pub fn report_actual(
    store: &mut impl PredictionStore,
    id: &PredictionId,
    actual_arrival: NaiveDateTime,
) -> Result<PredictionRecord, StoreError> {
    let mut record = store.get(id)?;
    if record.actual_arrival.is_some() {
        log::warn!("prediction {id} already reconciled; overwriting the recorded arrival");
    }
    record.actual_arrival = Some(actual_arrival);
    record.accuracy = Some(accuracy_ops::reconcile(
        &record.predicted_arrival,
        &actual_arrival,
    ));
    record.status = PredictionStatus::Arrived;
    store.update(&record)?;
    log::debug!(
        "prediction {} reconciled: accuracy {}",
        record.id,
        record.accuracy.unwrap_or_default()
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::report_actual;
    use crate::model::factors::{TrafficLevel, WeatherCondition};
    use crate::model::fleet::{Bus, BusId, Route, RouteId, StopNumber};
    use crate::model::prediction::PredictorConfig;
    use crate::model::record::{PredictionId, PredictionStatus};
    use crate::service::{generate_ops, TripUpdate};
    use crate::store::{FleetFile, MemoryStore, PredictionStore, StoreError};
    use chrono::{Duration, NaiveDateTime};
    use geo::Point;

    fn parse(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .expect("failed to parse test datetime")
    }

    fn seeded_store() -> (MemoryStore, PredictionId, NaiveDateTime) {
        let fleet = FleetFile {
            buses: vec![Bus {
                id: BusId::from("bus-1"),
                number: String::from("1"),
                capacity: None,
            }],
            routes: vec![Route {
                id: RouteId::from("route-1"),
                name: String::from("Crosstown"),
                stops: vec![],
            }],
        };
        let update = TripUpdate {
            bus_id: BusId::from("bus-1"),
            route_id: RouteId::from("route-1"),
            stop_number: StopNumber(2),
            location: Point::new(-104.99, 39.74),
            traffic: TrafficLevel::Medium,
            weather: WeatherCondition::Clear,
            speed_kmh: 30.0,
            distance_to_stop_km: 3.0,
        };
        let mut store = MemoryStore::new();
        let now = parse("2024-03-20 13:00:00");
        let record = generate_ops::generate(
            &mut store,
            &fleet,
            &PredictorConfig::default(),
            &update,
            now,
        )
        .expect("generate should succeed");
        (store, record.id, record.predicted_arrival)
    }

    #[test]
    fn test_report_sets_status_and_accuracy() {
        let (mut store, id, predicted) = seeded_store();
        let record = report_actual(&mut store, &id, predicted + Duration::minutes(10))
            .expect("report should succeed");
        assert_eq!(record.status, PredictionStatus::Arrived);
        assert_eq!(record.accuracy, Some(80));
        assert_eq!(record.actual_arrival, Some(predicted + Duration::minutes(10)));

        let persisted = store.get(&id).expect("record should exist");
        assert_eq!(persisted, record);
    }

    #[test]
    fn test_unknown_prediction_is_not_found() {
        let (mut store, _, _) = seeded_store();
        let err = report_actual(&mut store, &PredictionId(999), parse("2024-03-20 14:00:00"))
            .expect_err("unknown id should fail");
        assert!(matches!(err, StoreError::PredictionNotFound(_)));
    }

    #[test]
    fn test_repeat_report_overwrites() {
        let (mut store, id, predicted) = seeded_store();
        report_actual(&mut store, &id, predicted).expect("report should succeed");
        let second = report_actual(&mut store, &id, predicted + Duration::minutes(25))
            .expect("repeat report should succeed");
        assert_eq!(second.accuracy, Some(50));
        assert_eq!(
            second.actual_arrival,
            Some(predicted + Duration::minutes(25))
        );
    }
}
