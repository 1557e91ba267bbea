use super::{FleetRegistry, StoreError};
use crate::model::fleet::{Bus, BusId, Route, RouteId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// fleet definition document: the buses and routes (with stops) that
/// prediction requests resolve references against. read from TOML or JSON
/// by file extension.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FleetFile {
    #[serde(default)]
    pub buses: Vec<Bus>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl FleetFile {
    pub fn from_path(path: &Path) -> Result<FleetFile, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StoreError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);
        let fleet = if is_toml {
            toml::from_str(&contents).map_err(|e| StoreError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&contents).map_err(|e| StoreError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        };
        Ok(fleet)
    }
}

impl FleetRegistry for FleetFile {
    fn bus(&self, id: &BusId) -> Option<&Bus> {
        self.buses.iter().find(|b| &b.id == id)
    }

    fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| &r.id == id)
    }

    fn buses(&self) -> &[Bus] {
        &self.buses
    }

    fn routes(&self) -> &[Route] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::FleetFile;
    use crate::model::fleet::{BusId, RouteId};
    use crate::store::FleetRegistry;

    #[test]
    fn test_registry_lookups_from_toml() {
        let fleet: FleetFile = toml::from_str(
            r#"
            [[buses]]
            id = "bus-12"
            number = "12"

            [[routes]]
            id = "route-4"
            name = "Downtown Loop"

            [[routes.stops]]
            number = 1
            name = "Union Station"
            location = { x = -105.00, y = 39.75 }
            "#,
        )
        .expect("failed to parse fleet fixture");

        assert!(fleet.bus(&BusId::from("bus-12")).is_some());
        assert!(fleet.bus(&BusId::from("bus-99")).is_none());
        let route = fleet
            .route(&RouteId::from("route-4"))
            .expect("route should exist");
        assert_eq!(route.stops.len(), 1);
        assert_eq!(route.stops[0].name, "Union Station");
    }
}
