use crate::model::fleet::{Bus, BusId, Route, RouteId};

/// read-only view of the fleet that prediction requests resolve their bus
/// and route references against
pub trait FleetRegistry {
    fn bus(&self, id: &BusId) -> Option<&Bus>;
    fn route(&self, id: &RouteId) -> Option<&Route>;
    fn buses(&self) -> &[Bus];
    fn routes(&self) -> &[Route];
}
