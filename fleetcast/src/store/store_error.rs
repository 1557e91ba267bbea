use crate::model::record::PredictionId;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("prediction not found: {0}")]
    PredictionNotFound(PredictionId),
    #[error("failed reading '{path}': {message}")]
    ReadError { path: String, message: String },
    #[error("failed writing '{path}': {message}")]
    WriteError { path: String, message: String },
}
