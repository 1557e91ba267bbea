use chrono::NaiveDateTime;

/// points of accuracy lost per minute of deviation between the predicted
/// and observed arrival
pub const PENALTY_PER_MINUTE: f64 = 2.0;

/// scores a prediction against the observed arrival: 100 minus two points
/// per absolute minute of deviation, clamped at zero and rounded to the
/// nearest integer. 50 minutes or more of deviation scores zero.
pub fn reconcile(predicted: &NaiveDateTime, actual: &NaiveDateTime) -> u8 {
    let difference_ms = (*predicted - *actual).num_milliseconds().abs();
    let difference_minutes = difference_ms as f64 / 60_000.0;
    let score = (100.0 - PENALTY_PER_MINUTE * difference_minutes).max(0.0);
    score.round() as u8
}
