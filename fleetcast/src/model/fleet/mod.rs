mod bus;
mod route;
mod stop;

pub use bus::{Bus, BusId};
pub use route::{Route, RouteId};
pub use stop::{Stop, StopNumber};
