/// arithmetic mean of past recorded travel durations in minutes, with no
/// decay and no outlier rejection. None when there is no history, in which
/// case the configured default base applies.
pub fn mean_travel_minutes(durations: &[f64]) -> Option<f64> {
    if durations.is_empty() {
        return None;
    }
    Some(durations.iter().sum::<f64>() / durations.len() as f64)
}
