use super::AdjustmentTable;
use serde::{Deserialize, Serialize};

/// tunable constants of the predictor. the defaults reproduce the deployed
/// rule set; deployments and tests override them from a TOML file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PredictorConfig {
    /// base travel time applied when a (bus, route) pair has no history
    pub default_base_minutes: f64,
    /// records scoring at or above this accuracy count as accurate
    pub accurate_threshold: u8,
    pub adjustments: AdjustmentTable,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        PredictorConfig {
            default_base_minutes: 30.0,
            accurate_threshold: 80,
            adjustments: AdjustmentTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PredictorConfig;

    #[test]
    fn test_defaults() {
        let config = PredictorConfig::default();
        assert_eq!(config.default_base_minutes, 30.0);
        assert_eq!(config.accurate_threshold, 80);
    }

    #[test]
    fn test_override_from_toml() {
        let config: PredictorConfig = toml::from_str(
            r#"
            default_base_minutes = 45.0

            [adjustments]
            neutral_speed_kmh = 40.0
            "#,
        )
        .expect("failed to parse config override");
        assert_eq!(config.default_base_minutes, 45.0);
        assert_eq!(config.accurate_threshold, 80);
        assert_eq!(config.adjustments.neutral_speed_kmh, 40.0);
    }
}
