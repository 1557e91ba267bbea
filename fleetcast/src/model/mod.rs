pub mod analytics;
pub mod factors;
pub mod fleet;
pub mod history_ops;
pub mod prediction;
pub mod record;
pub mod validate;
