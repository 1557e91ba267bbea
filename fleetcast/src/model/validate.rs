use itertools::Itertools;
use std::fmt::Display;

/// upper bound on a plausible bus speed in km/h
pub const MAX_SPEED_KMH: f64 = 120.0;

/// a single rejected field, reported back to the caller by name
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// every field-level failure for one request, collected before any
/// computation runs
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "validation failed: {}",
            self.0.iter().map(|e| e.to_string()).join("; ")
        )
    }
}

impl std::error::Error for ValidationErrors {}

/// field checks applied to a trip update before the predictor runs.
/// malformed enum values never reach this point; they are rejected at the
/// serde/clap boundary.
pub fn validate_trip_update(
    speed_kmh: f64,
    distance_to_stop_km: f64,
) -> Result<(), ValidationErrors> {
    let mut errors: Vec<FieldError> = Vec::new();
    if !speed_kmh.is_finite() || speed_kmh < 0.0 || speed_kmh > MAX_SPEED_KMH {
        errors.push(FieldError {
            field: "speed_kmh",
            message: format!("must be between 0 and {MAX_SPEED_KMH}, got {speed_kmh}"),
        });
    }
    if !distance_to_stop_km.is_finite() || distance_to_stop_km < 0.0 {
        errors.push(FieldError {
            field: "distance_to_stop_km",
            message: format!("must be non-negative, got {distance_to_stop_km}"),
        });
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_trip_update;

    #[test]
    fn test_valid_update() {
        assert!(validate_trip_update(0.0, 0.0).is_ok());
        assert!(validate_trip_update(120.0, 12.5).is_ok());
    }

    #[test]
    fn test_all_failures_collected() {
        let errors = validate_trip_update(130.0, -1.0).expect_err("should fail validation");
        assert_eq!(errors.0.len(), 2);
        assert_eq!(errors.0[0].field, "speed_kmh");
        assert_eq!(errors.0[1].field, "distance_to_stop_km");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(validate_trip_update(f64::NAN, 1.0).is_err());
        assert!(validate_trip_update(30.0, f64::INFINITY).is_err());
    }
}
