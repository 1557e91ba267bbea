mod app_error;
pub mod batch_ops;
mod config_ops;
mod fleet_app;
mod operation;
pub mod simulate_ops;

pub use app_error::AppError;
pub use config_ops::{load_config, write_default_config};
pub use fleet_app::FleetApp;
pub use operation::FleetOperation;
