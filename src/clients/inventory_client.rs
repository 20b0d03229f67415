use rust_decimal::Decimal;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::algorithms::{SearchOutcome, SearchQuery, SortKey};
use crate::domain::{Product, ProductRef};
use crate::error::ServiceError;
use crate::messages::InventoryRequest;

/// Client for interacting with the inventory actor. Cheap to clone; every
/// clone talks to the same store.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    // Custom add method so the full product is not recorded on the span

    #[instrument(skip(self, product), fields(barcode = %product.barcode))]
    pub async fn add(&self, product: Product) -> Result<ProductRef, ServiceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InventoryRequest::Add { product, respond_to })
            .await
            .map_err(|_| ServiceError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| ServiceError::ActorCommunicationError("Actor dropped".to_string()))?
            .map_err(ServiceError::from)
    }

    /// Manual method for special cases (no response needed)
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ServiceError> {
        debug!("Sending shutdown request");
        self.sender
            .send(InventoryRequest::Shutdown)
            .await
            .map_err(|e| ServiceError::ActorCommunicationError(e.to_string()))?;
        Ok(())
    }
}

client_method!(InventoryClient => fn remove(barcode: String) -> bool as InventoryRequest::Remove);
client_method!(InventoryClient => fn find_by_key(barcode: String) -> Option<ProductRef> as InventoryRequest::FindByKey);
client_method!(InventoryClient => fn exists(barcode: String) -> bool as InventoryRequest::Exists);
client_method!(InventoryClient => fn filter_by_category(category: String) -> Vec<ProductRef> as InventoryRequest::FilterByCategory);
client_method!(InventoryClient => fn snapshot() -> Vec<ProductRef> as InventoryRequest::Snapshot);
client_method!(InventoryClient => fn count() -> usize as InventoryRequest::Count);
client_method!(InventoryClient => fn inventory_value() -> Decimal as InventoryRequest::InventoryValue);
client_method!(InventoryClient => fn sorted(key: SortKey) -> Vec<ProductRef> as InventoryRequest::Sorted);
client_method!(InventoryClient => fn search(query: SearchQuery) -> SearchOutcome as InventoryRequest::Search);
