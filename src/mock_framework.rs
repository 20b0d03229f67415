//! # Mock Framework
//!
//! Utilities for testing [`InventoryClient`] without a running service.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then helpers like [`expect_add`] or [`expect_search`] to assert
//! what the client sent and to script the reply.

use tokio::sync::mpsc;

use crate::algorithms::{SearchOutcome, SearchQuery};
use crate::clients::InventoryClient;
use crate::domain::{Product, ProductRef};
use crate::inventory::InventoryError;
use crate::messages::{InventoryRequest, ServiceResponse};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(Product, ServiceResponse<ProductRef, InventoryError>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Add { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Remove request
pub async fn expect_remove(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, ServiceResponse<bool, InventoryError>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Remove { barcode, respond_to }) => Some((barcode, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Search request
pub async fn expect_search(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(SearchQuery, ServiceResponse<SearchOutcome, InventoryError>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Search { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_mock_client_add() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            let product = Product::new(6, "Impresora", "6", "Electrónica", dec!(3000), 5);
            client.add(product).await
        });

        let (product, responder) = expect_add(&mut receiver).await.expect("Expected Add request");
        assert_eq!(product.barcode, "6");
        responder.send(Ok(Arc::new(product))).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result.unwrap().name, "Impresora");
    }

    #[tokio::test]
    async fn test_mock_client_passes_inventory_errors_through() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            client.add(Product::new(6, "Impresora", "6", "Electrónica", dec!(3000), 5)).await
        });

        let (_, responder) = expect_add(&mut receiver).await.expect("Expected Add request");
        responder.send(Err(InventoryError::DuplicateKey("6".to_string()))).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(
            result,
            Err(ServiceError::Inventory(InventoryError::DuplicateKey("6".to_string())))
        );
    }

    #[tokio::test]
    async fn test_mock_client_dropped_reply() {
        let (client, mut receiver) = create_mock_client(10);

        let remove_task = tokio::spawn(async move { client.remove("9".to_string()).await });

        let (barcode, responder) = expect_remove(&mut receiver).await.expect("Expected Remove request");
        assert_eq!(barcode, "9");
        drop(responder);

        let result = remove_task.await.unwrap();
        assert_eq!(
            result,
            Err(ServiceError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }

    #[tokio::test]
    async fn test_mock_client_search() {
        let (client, mut receiver) = create_mock_client(10);

        let search_task = tokio::spawn(async move { client.search(SearchQuery::Id(7)).await });

        let (query, responder) = expect_search(&mut receiver).await.expect("Expected Search request");
        assert_eq!(query, SearchQuery::Id(7));
        responder
            .send(Ok(SearchOutcome { product: None, iterations: 4 }))
            .unwrap();

        let outcome = search_task.await.unwrap().unwrap();
        assert!(!outcome.is_found());
        assert_eq!(outcome.iterations, 4);
    }
}
