use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// lifecycle of a prediction record. Arrived is the only status a service
/// operation transitions into; InTransit and Cancelled are set only by
/// direct store mutation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PredictionStatus {
    #[default]
    Pending,
    InTransit,
    Arrived,
    Cancelled,
}

impl PredictionStatus {
    /// a prediction still awaiting its arrival
    pub fn is_open(&self) -> bool {
        matches!(self, PredictionStatus::Pending | PredictionStatus::InTransit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionStatus::Pending => "pending",
            PredictionStatus::InTransit => "in_transit",
            PredictionStatus::Arrived => "arrived",
            PredictionStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for PredictionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
