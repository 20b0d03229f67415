use thiserror::Error;

use crate::inventory::InventoryError;

/// Errors returned by [`InventoryClient`](crate::clients::InventoryClient) calls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
