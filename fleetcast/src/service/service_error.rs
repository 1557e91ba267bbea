use crate::model::fleet::{BusId, RouteId};
use crate::model::validate::ValidationErrors;
use crate::store::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("bus not found: {0}")]
    BusNotFound(BusId),
    #[error("route not found: {0}")]
    RouteNotFound(RouteId),
    #[error(transparent)]
    InvalidInput(#[from] ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}
