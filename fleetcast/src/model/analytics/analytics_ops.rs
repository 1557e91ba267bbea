use super::AccuracyReport;
use crate::model::record::PredictionRecord;
use itertools::Itertools;

/// reduction over persisted records: totals, mean accuracy over the scored
/// records, and the count meeting the accurate threshold.
pub fn accuracy_report(records: &[PredictionRecord], accurate_threshold: u8) -> AccuracyReport {
    let scored = records.iter().filter_map(|r| r.accuracy).collect_vec();
    let mean_accuracy = if scored.is_empty() {
        None
    } else {
        Some(scored.iter().map(|a| *a as f64).sum::<f64>() / scored.len() as f64)
    };
    let accurate_predictions = scored
        .iter()
        .filter(|a| **a >= accurate_threshold)
        .count();
    AccuracyReport {
        total_predictions: records.len(),
        scored_predictions: scored.len(),
        mean_accuracy,
        accurate_predictions,
        accurate_threshold,
    }
}
