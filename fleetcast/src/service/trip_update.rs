use crate::model::factors::{TrafficLevel, WeatherCondition};
use crate::model::fleet::{BusId, RouteId, StopNumber};
use geo::Point;
use serde::{Deserialize, Serialize};

/// the upstream event that triggers a prediction: a bus's current telemetry
/// and factor snapshot, targeted at one stop on its route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TripUpdate {
    pub bus_id: BusId,
    pub route_id: RouteId,
    pub stop_number: StopNumber,
    /// lon,lat of the bus at the time of the update
    pub location: Point<f64>,
    #[serde(default)]
    pub traffic: TrafficLevel,
    #[serde(default)]
    pub weather: WeatherCondition,
    /// km/h; zero means speed unknown or stationary
    #[serde(default)]
    pub speed_kmh: f64,
    /// km remaining to the target stop
    #[serde(default)]
    pub distance_to_stop_km: f64,
}
