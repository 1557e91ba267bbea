use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// position of a stop along its route, starting at 1
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopNumber(pub u32);

impl Display for StopNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// a named point along a route at which arrival is predicted
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stop {
    pub number: StopNumber,
    pub name: String,
    /// lon,lat
    pub location: Point<f64>,
}
