use serde::Serialize;

/// aggregate accuracy figures for a window of prediction records
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccuracyReport {
    /// every prediction in the window, scored or not
    pub total_predictions: usize,
    /// predictions reconciled against an observed arrival
    pub scored_predictions: usize,
    /// mean accuracy over the scored predictions; None when none are scored
    pub mean_accuracy: Option<f64>,
    /// scored predictions at or above the accurate threshold
    pub accurate_predictions: usize,
    pub accurate_threshold: u8,
}
