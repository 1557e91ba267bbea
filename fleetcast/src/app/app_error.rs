use crate::service::ServiceError;
use crate::store::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failed rendering configuration: {0}")]
    ConfigRenderError(#[from] toml::ser::Error),
    #[error("invalid argument: {0}")]
    InvalidArgumentError(String),
    #[error("failure reading trip updates: {0}")]
    CsvReadError(String),
    #[error(transparent)]
    ServiceError(#[from] ServiceError),
    #[error(transparent)]
    StoreError(#[from] StoreError),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    OtherError(String),
}
