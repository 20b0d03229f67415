use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::algorithms::{search, sort_by, SearchOutcome, SearchQuery, SortKey};
use crate::clients::InventoryClient;
use crate::domain::{Product, ProductRef};
use crate::inventory::{InventoryError, InventoryStore};
use crate::messages::{InventoryRequest, ServiceResponse};

// =============================================================================
// INVENTORY SERVICE
// =============================================================================

/// Actor that owns one [`InventoryStore`].
///
/// Requests are processed one at a time in arrival order, which is what
/// serializes access for callers running on several tasks. The store itself
/// has no locking.
pub struct InventoryService {
    receiver: mpsc::Receiver<InventoryRequest>,
    store: InventoryStore,
}

impl InventoryService {
    pub fn new(buffer_size: usize, store: InventoryStore) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        let client = InventoryClient::new(sender);
        (service, client)
    }

    /// Main actor loop. Ends on `Shutdown` or once every client is dropped.
    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) {
        info!(products = self.store.len(), "InventoryService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::Add { product, respond_to } => {
                    self.handle_add(product, respond_to);
                }
                InventoryRequest::Remove { barcode, respond_to } => {
                    self.handle_remove(barcode, respond_to);
                }
                InventoryRequest::FindByKey { barcode, respond_to } => {
                    self.handle_find_by_key(barcode, respond_to);
                }
                InventoryRequest::Exists { barcode, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.exists(&barcode)));
                }
                InventoryRequest::FilterByCategory { category, respond_to } => {
                    self.handle_filter_by_category(category, respond_to);
                }
                InventoryRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.snapshot()));
                }
                InventoryRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
                InventoryRequest::InventoryValue { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.inventory_value()));
                }
                InventoryRequest::Sorted { key, respond_to } => {
                    self.handle_sorted(key, respond_to);
                }
                InventoryRequest::Search { query, respond_to } => {
                    self.handle_search(query, respond_to);
                }
                InventoryRequest::Shutdown => {
                    info!("InventoryService shutting down");
                    break;
                }
            }
        }

        info!("InventoryService stopped");
    }

    #[instrument(fields(barcode = %product.barcode, product_id = product.id), skip(self, product, respond_to))]
    fn handle_add(&mut self, product: Product, respond_to: ServiceResponse<ProductRef, InventoryError>) {
        debug!("Processing add request");

        let result = self.store.add(product);
        match &result {
            Ok(product) => info!(product_name = %product.name, "Product added"),
            Err(e) => warn!(error = %e, "Product rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(barcode = %barcode), skip(self, respond_to))]
    fn handle_remove(&mut self, barcode: String, respond_to: ServiceResponse<bool, InventoryError>) {
        debug!("Processing remove request");

        let removed = self.store.remove(&barcode);
        if removed {
            info!("Product removed");
        } else {
            debug!("Product not found");
        }

        let _ = respond_to.send(Ok(removed));
    }

    #[instrument(fields(barcode = %barcode), skip(self, respond_to))]
    fn handle_find_by_key(
        &self,
        barcode: String,
        respond_to: ServiceResponse<Option<ProductRef>, InventoryError>,
    ) {
        debug!("Processing find_by_key request");

        let product = self.store.find_by_key(&barcode);
        match &product {
            Some(product) => info!(product_name = %product.name, price = %product.price, "Product found"),
            None => debug!("Product not found"),
        }

        let _ = respond_to.send(Ok(product));
    }

    #[instrument(fields(category = %category), skip(self, respond_to))]
    fn handle_filter_by_category(
        &self,
        category: String,
        respond_to: ServiceResponse<Vec<ProductRef>, InventoryError>,
    ) {
        let products = self.store.filter_by_category(&category);
        debug!(matches = products.len(), "Category filtered");
        let _ = respond_to.send(Ok(products));
    }

    #[instrument(fields(key = %key), skip(self, respond_to))]
    fn handle_sorted(&self, key: SortKey, respond_to: ServiceResponse<Vec<ProductRef>, InventoryError>) {
        let sorted = sort_by(key, self.store.snapshot());
        debug!(products = sorted.len(), "Snapshot sorted");
        let _ = respond_to.send(Ok(sorted));
    }

    #[instrument(fields(query = %query, algorithm = query.algorithm()), skip(self, query, respond_to))]
    fn handle_search(&self, query: SearchQuery, respond_to: ServiceResponse<SearchOutcome, InventoryError>) {
        let outcome = search(self.store.snapshot(), &query);
        match &outcome.product {
            Some(product) => info!(iterations = outcome.iterations, product_name = %product.name, "Product found"),
            None => info!(iterations = outcome.iterations, "Product not found"),
        }
        let _ = respond_to.send(Ok(outcome));
    }
}
