use tracing::{error, info, instrument};

use crate::actors::InventoryService;
use crate::clients::InventoryClient;
use crate::error::ServiceError;
use crate::inventory::InventoryStore;

/// Starts the inventory actor and owns its task handle.
///
/// Must be created inside a tokio runtime.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Spawn the service over `store` and return the coordinator holding its client.
    #[instrument(name = "inventory_system", skip(store), fields(products = store.len()))]
    pub fn start(buffer_size: usize, store: InventoryStore) -> Self {
        info!("Starting inventory system");

        let (service, inventory_client) = InventoryService::new(buffer_size, store);
        let handle = tokio::spawn(service.run());

        info!("Inventory system started successfully");

        Self {
            inventory_client,
            handle,
        }
    }

    /// Ask the service to stop and wait for its task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), ServiceError> {
        info!("Shutting down inventory system");

        // A closed channel means the service already stopped; still join it.
        let _ = self.inventory_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(ServiceError::ActorCommunicationError(format!(
                "Service task failed: {e}"
            )));
        }

        info!("Inventory system shutdown complete");
        Ok(())
    }
}
