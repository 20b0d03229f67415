use rust_decimal::Decimal;
use tokio::sync::oneshot;

use crate::algorithms::{SearchOutcome, SearchQuery, SortKey};
use crate::domain::{Product, ProductRef};
use crate::inventory::InventoryError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests understood by [`InventoryService`](crate::actors::InventoryService).
/// Each variant carries its parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum InventoryRequest {
    Add {
        product: Product,
        respond_to: ServiceResponse<ProductRef, InventoryError>,
    },
    Remove {
        barcode: String,
        respond_to: ServiceResponse<bool, InventoryError>,
    },
    FindByKey {
        barcode: String,
        respond_to: ServiceResponse<Option<ProductRef>, InventoryError>,
    },
    Exists {
        barcode: String,
        respond_to: ServiceResponse<bool, InventoryError>,
    },
    FilterByCategory {
        category: String,
        respond_to: ServiceResponse<Vec<ProductRef>, InventoryError>,
    },
    Snapshot {
        respond_to: ServiceResponse<Vec<ProductRef>, InventoryError>,
    },
    Count {
        respond_to: ServiceResponse<usize, InventoryError>,
    },
    InventoryValue {
        respond_to: ServiceResponse<Decimal, InventoryError>,
    },
    Sorted {
        key: SortKey,
        respond_to: ServiceResponse<Vec<ProductRef>, InventoryError>,
    },
    Search {
        query: SearchQuery,
        respond_to: ServiceResponse<SearchOutcome, InventoryError>,
    },
    Shutdown,
}
