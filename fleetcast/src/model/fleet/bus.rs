use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub String);

impl Display for BusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BusId {
    fn from(value: &str) -> Self {
        BusId(String::from(value))
    }
}

/// a vehicle in the fleet, referenced by identity from prediction records
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bus {
    pub id: BusId,
    /// the fleet number painted on the vehicle
    pub number: String,
    #[serde(default)]
    pub capacity: Option<u32>,
}
