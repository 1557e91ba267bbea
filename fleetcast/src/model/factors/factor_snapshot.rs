use super::{TimeOfDay, TrafficLevel, WeatherCondition};
use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// the conditions captured at prediction time. the distance remaining is
/// recorded on the snapshot but does not enter the travel time estimate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FactorSnapshot {
    #[serde(default)]
    pub traffic: TrafficLevel,
    #[serde(default)]
    pub weather: WeatherCondition,
    pub time_of_day: TimeOfDay,
    pub day_of_week: Weekday,
    /// km/h; zero means speed unknown or stationary
    pub speed_kmh: f64,
    /// km remaining to the target stop
    pub distance_to_stop_km: f64,
}

impl FactorSnapshot {
    /// captures a snapshot for an update arriving at `now`, deriving the
    /// time-of-day bucket and weekday from the update time.
    pub fn from_update(
        traffic: TrafficLevel,
        weather: WeatherCondition,
        speed_kmh: f64,
        distance_to_stop_km: f64,
        now: &NaiveDateTime,
    ) -> FactorSnapshot {
        FactorSnapshot {
            traffic,
            weather,
            time_of_day: TimeOfDay::from_datetime(now),
            day_of_week: now.weekday(),
            speed_kmh,
            distance_to_stop_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FactorSnapshot;
    use crate::model::factors::{TimeOfDay, TrafficLevel, WeatherCondition};
    use chrono::{NaiveDateTime, Weekday};

    #[test]
    fn test_from_update_derives_bucket_and_weekday() {
        // 2024-03-18 is a Monday
        let now = NaiveDateTime::parse_from_str("2024-03-18 18:30:00", "%Y-%m-%d %H:%M:%S")
            .expect("failed to parse test datetime");
        let snapshot = FactorSnapshot::from_update(
            TrafficLevel::High,
            WeatherCondition::Rainy,
            42.0,
            3.5,
            &now,
        );
        assert_eq!(snapshot.time_of_day, TimeOfDay::Evening);
        assert_eq!(snapshot.day_of_week, Weekday::Mon);
        assert_eq!(snapshot.speed_kmh, 42.0);
        assert_eq!(snapshot.distance_to_stop_km, 3.5);
    }
}
