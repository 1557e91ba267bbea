use super::AdjustmentTable;
use crate::model::factors::FactorSnapshot;
use chrono::{Duration, NaiveDateTime};

/// multiplies the base travel time by the traffic, weather, time-of-day,
/// and speed adjustments. pure arithmetic over already-validated inputs;
/// the factors are independent, so application order only matters for
/// floating point rounding.
pub fn estimate_travel_minutes(
    base_minutes: f64,
    snapshot: &FactorSnapshot,
    table: &AdjustmentTable,
) -> f64 {
    let mut minutes = base_minutes;
    minutes *= table.traffic_multiplier(&snapshot.traffic);
    minutes *= table.weather_multiplier(&snapshot.weather);
    minutes *= table.time_of_day_multiplier(&snapshot.time_of_day);
    minutes *= table.speed_multiplier(snapshot.speed_kmh);
    minutes
}

/// composes the update time and the travel estimate into the predicted
/// arrival, at millisecond resolution.
pub fn predict_arrival(
    now: &NaiveDateTime,
    base_minutes: f64,
    snapshot: &FactorSnapshot,
    table: &AdjustmentTable,
) -> NaiveDateTime {
    let minutes = estimate_travel_minutes(base_minutes, snapshot, table);
    *now + travel_duration(minutes)
}

/// converts fractional minutes to a duration, rounded to whole milliseconds
pub fn travel_duration(minutes: f64) -> Duration {
    Duration::milliseconds((minutes * 60_000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::{estimate_travel_minutes, predict_arrival, travel_duration};
    use crate::model::factors::{FactorSnapshot, TimeOfDay, TrafficLevel, WeatherCondition};
    use crate::model::prediction::AdjustmentTable;
    use chrono::{Duration, NaiveDateTime, Weekday};

    fn snapshot(
        traffic: TrafficLevel,
        weather: WeatherCondition,
        time_of_day: TimeOfDay,
        speed_kmh: f64,
    ) -> FactorSnapshot {
        FactorSnapshot {
            traffic,
            weather,
            time_of_day,
            day_of_week: Weekday::Wed,
            speed_kmh,
            distance_to_stop_km: 4.2,
        }
    }

    fn parse(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .expect("failed to parse test datetime")
    }

    #[test]
    fn test_all_factors_neutral_is_identity() {
        let table = AdjustmentTable::default();
        let snapshot = snapshot(
            TrafficLevel::Medium,
            WeatherCondition::Clear,
            TimeOfDay::Afternoon,
            30.0,
        );
        let estimate = estimate_travel_minutes(30.0, &snapshot, &table);
        assert_eq!(estimate, 30.0);

        let now = parse("2024-03-20 13:00:00");
        let predicted = predict_arrival(&now, 30.0, &snapshot, &table);
        assert_eq!(predicted, now + Duration::minutes(30));
    }

    #[test]
    fn test_high_traffic_later_than_low() {
        let table = AdjustmentTable::default();
        let high = snapshot(
            TrafficLevel::High,
            WeatherCondition::Clear,
            TimeOfDay::Afternoon,
            30.0,
        );
        let low = snapshot(
            TrafficLevel::Low,
            WeatherCondition::Clear,
            TimeOfDay::Afternoon,
            30.0,
        );
        let now = parse("2024-03-20 13:00:00");
        let predicted_high = predict_arrival(&now, 30.0, &high, &table);
        let predicted_low = predict_arrival(&now, 30.0, &low, &table);
        assert!(predicted_high > predicted_low);
    }

    #[test]
    fn test_zero_speed_applies_no_adjustment() {
        let table = AdjustmentTable::default();
        let snapshot = snapshot(
            TrafficLevel::Medium,
            WeatherCondition::Clear,
            TimeOfDay::Afternoon,
            0.0,
        );
        let estimate = estimate_travel_minutes(30.0, &snapshot, &table);
        assert_eq!(estimate, 30.0);
    }

    #[test]
    fn test_worst_case_scenario() {
        // 30 × 1.5 × 1.3 × 1.2 × (30/15) = 140.4 minutes
        let table = AdjustmentTable::default();
        let snapshot = snapshot(
            TrafficLevel::High,
            WeatherCondition::Rainy,
            TimeOfDay::Morning,
            15.0,
        );
        let estimate = estimate_travel_minutes(30.0, &snapshot, &table);
        assert!((estimate - 140.4).abs() < 1e-9);

        let now = parse("2024-03-20 07:30:00");
        let predicted = predict_arrival(&now, 30.0, &snapshot, &table);
        assert_eq!(predicted, now + Duration::milliseconds(8_424_000));
    }

    #[test]
    fn test_fast_bus_scenario() {
        // 30 × (30/60) = 15 minutes
        let table = AdjustmentTable::default();
        let snapshot = snapshot(
            TrafficLevel::Medium,
            WeatherCondition::Clear,
            TimeOfDay::Afternoon,
            60.0,
        );
        let estimate = estimate_travel_minutes(30.0, &snapshot, &table);
        assert_eq!(estimate, 15.0);

        let now = parse("2024-03-20 13:00:00");
        let predicted = predict_arrival(&now, 30.0, &snapshot, &table);
        assert_eq!(predicted, now + Duration::minutes(15));
    }

    #[test]
    fn test_travel_duration_rounds_to_milliseconds() {
        assert_eq!(travel_duration(1.0), Duration::minutes(1));
        assert_eq!(travel_duration(0.5), Duration::seconds(30));
        assert_eq!(travel_duration(140.4), Duration::milliseconds(8_424_000));
    }
}
