mod fleet_file;
mod fleet_registry;
mod json_store;
mod memory_store;
mod prediction_store;
mod record_filter;
mod store_error;

pub use fleet_file::FleetFile;
pub use fleet_registry::FleetRegistry;
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use prediction_store::PredictionStore;
pub use record_filter::RecordFilter;
pub use store_error::StoreError;
