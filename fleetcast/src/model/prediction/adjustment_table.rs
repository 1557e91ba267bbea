use crate::model::factors::{TimeOfDay, TrafficLevel, WeatherCondition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// multiplier applied when a category value has no entry in its table
const NEUTRAL: f64 = 1.0;

/// the factor rule set, expressed as lookup tables from category value to
/// multiplier so deployments and tests can override it from configuration.
/// a partially overridden table leaves the unnamed categories neutral.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AdjustmentTable {
    /// traffic level name → multiplier
    pub traffic: HashMap<String, f64>,
    /// weather condition name → multiplier
    pub weather: HashMap<String, f64>,
    /// time-of-day bucket name → multiplier
    pub time_of_day: HashMap<String, f64>,
    /// km/h at which the speed adjustment is neutral
    pub neutral_speed_kmh: f64,
}

impl Default for AdjustmentTable {
    fn default() -> Self {
        AdjustmentTable {
            traffic: HashMap::from([
                (String::from("low"), 0.8),
                (String::from("medium"), 1.0),
                (String::from("high"), 1.5),
            ]),
            weather: HashMap::from([
                (String::from("clear"), 1.0),
                (String::from("rainy"), 1.3),
                (String::from("snowy"), 1.3),
                (String::from("foggy"), 1.0),
            ]),
            time_of_day: HashMap::from([
                (String::from("morning"), 1.2),
                (String::from("afternoon"), 1.0),
                (String::from("evening"), 1.2),
                (String::from("night"), 1.0),
            ]),
            neutral_speed_kmh: 30.0,
        }
    }
}

impl AdjustmentTable {
    pub fn traffic_multiplier(&self, level: &TrafficLevel) -> f64 {
        self.traffic.get(level.as_str()).copied().unwrap_or(NEUTRAL)
    }

    pub fn weather_multiplier(&self, condition: &WeatherCondition) -> f64 {
        self.weather
            .get(condition.as_str())
            .copied()
            .unwrap_or(NEUTRAL)
    }

    pub fn time_of_day_multiplier(&self, bucket: &TimeOfDay) -> f64 {
        self.time_of_day
            .get(bucket.as_str())
            .copied()
            .unwrap_or(NEUTRAL)
    }

    /// neutral_speed / speed for positive speeds. zero speed means the
    /// speed is unknown and no adjustment applies.
    pub fn speed_multiplier(&self, speed_kmh: f64) -> f64 {
        if speed_kmh > 0.0 {
            self.neutral_speed_kmh / speed_kmh
        } else {
            NEUTRAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AdjustmentTable;
    use crate::model::factors::{TimeOfDay, TrafficLevel, WeatherCondition};

    #[test]
    fn test_default_rule_set() {
        let table = AdjustmentTable::default();
        assert_eq!(table.traffic_multiplier(&TrafficLevel::High), 1.5);
        assert_eq!(table.traffic_multiplier(&TrafficLevel::Medium), 1.0);
        assert_eq!(table.traffic_multiplier(&TrafficLevel::Low), 0.8);
        assert_eq!(table.weather_multiplier(&WeatherCondition::Rainy), 1.3);
        assert_eq!(table.weather_multiplier(&WeatherCondition::Snowy), 1.3);
        // foggy carries no modeled penalty
        assert_eq!(table.weather_multiplier(&WeatherCondition::Foggy), 1.0);
        assert_eq!(table.time_of_day_multiplier(&TimeOfDay::Morning), 1.2);
        assert_eq!(table.time_of_day_multiplier(&TimeOfDay::Evening), 1.2);
        assert_eq!(table.time_of_day_multiplier(&TimeOfDay::Night), 1.0);
    }

    #[test]
    fn test_speed_multiplier() {
        let table = AdjustmentTable::default();
        assert_eq!(table.speed_multiplier(30.0), 1.0);
        assert_eq!(table.speed_multiplier(15.0), 2.0);
        assert_eq!(table.speed_multiplier(60.0), 0.5);
        // zero means unknown, not division by zero
        assert_eq!(table.speed_multiplier(0.0), 1.0);
    }

    #[test]
    fn test_partial_override_leaves_rest_default() {
        let table: AdjustmentTable = toml::from_str(
            r#"
            [traffic]
            high = 2.0
            "#,
        )
        .expect("failed to parse override table");
        assert_eq!(table.traffic_multiplier(&TrafficLevel::High), 2.0);
        // the overridden table replaces the traffic map wholesale
        assert_eq!(table.traffic_multiplier(&TrafficLevel::Low), 1.0);
        // untouched tables keep their defaults
        assert_eq!(table.weather_multiplier(&WeatherCondition::Rainy), 1.3);
        assert_eq!(table.neutral_speed_kmh, 30.0);
    }
}
