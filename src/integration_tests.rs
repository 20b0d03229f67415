#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::algorithms::{
        binary_search_by_id, linear_search_by_name, partition_sort_by_id, SearchQuery, SortKey,
    };
    use crate::app_system::InventorySystem;
    use crate::domain::{Product, ProductInput};
    use crate::error::ServiceError;
    use crate::inventory::{InventoryError, InventoryStore};

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new(3, "Teclado", "3", "Electrónica", dec!(1200), 20),
            Product::new(4, "Mouse", "4", "Electrónica", dec!(800), 35),
            Product::new(5, "Monitor", "5", "Electrónica", dec!(4500), 10),
            Product::new(6, "Impresora", "6", "Electrónica", dec!(3000), 5),
            Product::new(7, "Auriculares", "7", "Electrónica", dec!(1500), 25),
            Product::new(8, "Cámara Web", "8", "Electrónica", dec!(2000), 15),
            Product::new(9, "Disco Duro Externo", "9", "Electrónica", dec!(3500), 12),
            Product::new(10, "Memoria USB", "10", "Electrónica", dec!(500), 50),
            Product::new(11, "Sudadera", "11", "Ropa", dec!(300), 15),
        ]
    }

    #[test]
    fn test_snapshot_sort_search_flow() {
        let mut store = InventoryStore::new();
        for product in sample_products() {
            store.add(product).unwrap();
        }
        assert_eq!(store.snapshot().len(), 9);

        let by_id = partition_sort_by_id(store.snapshot());
        let found = binary_search_by_id(&by_id, 7);
        assert_eq!(found.product.as_ref().unwrap().name, "Auriculares");
        assert!(found.iterations <= 4);

        let mouse = linear_search_by_name(&store.snapshot(), "Mouse");
        assert_eq!(mouse.product.unwrap().barcode, "4");
        assert_eq!(mouse.iterations, 2);
    }

    #[test]
    fn test_duplicate_barcode_keeps_count() {
        let mut store = InventoryStore::with_products(sample_products()).unwrap();
        let err = store
            .add(Product::new(50, "Monitor Curvo", "5", "Electrónica", dec!(6000), 2))
            .unwrap_err();
        assert_eq!(err, InventoryError::DuplicateKey("5".to_string()));
        assert_eq!(store.len(), 9);
    }

    #[tokio::test]
    async fn test_inventory_system_flow() -> Result<(), Box<dyn std::error::Error>> {
        let store = InventoryStore::with_products(sample_products())?;
        let system = InventorySystem::start(16, store);
        let client = system.inventory_client.clone();

        let form = ProductInput {
            id: "12".into(),
            barcode: "12".into(),
            name: "Bocina".into(),
            category: "electrónica".into(),
            price: "650".into(),
            stock: "8".into(),
        };
        client.add(form.parse()?).await?;
        assert_eq!(client.count().await?, 10);
        assert_eq!(client.filter_by_category("ELECTRÓNICA".into()).await?.len(), 9);

        let by_price = client.sorted(SortKey::Price).await?;
        assert_eq!(by_price.first().map(|p| p.name.as_str()), Some("Sudadera"));

        let found = client.search(SearchQuery::Id(7)).await?;
        assert_eq!(found.product.unwrap().name, "Auriculares");
        assert!(found.iterations <= 4);

        let mouse = client.search(SearchQuery::Name("mouse".into())).await?;
        assert_eq!(mouse.iterations, 2);

        assert!(client.remove("4".into()).await?);
        assert!(!client.remove("4".into()).await?);
        let missing = client.search(SearchQuery::Name("Mouse".into())).await?;
        assert!(!missing.is_found());
        assert_eq!(missing.iterations, 9);

        system.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_clients_are_serialized() {
        let system = InventorySystem::start(4, InventoryStore::new());

        let tasks: Vec<_> = (0..20)
            .map(|i| {
                let client = system.inventory_client.clone();
                tokio::spawn(async move {
                    // Every barcode is submitted twice; exactly one of each pair wins.
                    let barcode = (i % 10).to_string();
                    client
                        .add(Product::new(i, format!("Item {i}"), barcode, "Lote", dec!(1), 1))
                        .await
                })
            })
            .collect();

        let mut accepted = 0;
        let mut duplicates = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(ServiceError::Inventory(InventoryError::DuplicateKey(_))) => duplicates += 1,
                Err(e) => panic!("Unexpected error: {e}"),
            }
        }

        assert_eq!(accepted, 10);
        assert_eq!(duplicates, 10);
        assert_eq!(system.inventory_client.count().await.unwrap(), 10);
        system.shutdown().await.unwrap();
    }
}
