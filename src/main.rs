use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

use inventory_sort::algorithms::{SearchQuery, SortKey};
use inventory_sort::app_system::{load_seed_products, setup_tracing, AppConfig, InventorySystem};
use inventory_sort::domain::Product;
use inventory_sort::inventory::InventoryStore;

/// Sample inventory loaded when no seed file is configured.
fn sample_products() -> Vec<Product> {
    [
        (3, "Teclado", "Electrónica", 1200, 20),
        (4, "Mouse", "Electrónica", 800, 35),
        (5, "Monitor", "Electrónica", 4500, 10),
        (6, "Impresora", "Electrónica", 3000, 5),
        (7, "Auriculares", "Electrónica", 1500, 25),
        (8, "Cámara Web", "Electrónica", 2000, 15),
        (9, "Disco Duro Externo", "Electrónica", 3500, 12),
        (10, "Memoria USB", "Electrónica", 500, 50),
        (11, "Sudadera", "Ropa", 300, 15),
    ]
    .into_iter()
    .map(|(id, name, category, price, stock)| {
        Product::new(id, name, id.to_string(), category, Decimal::from(price), stock)
    })
    .collect()
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);

    info!("Starting inventory demo");

    let products = match &config.seed_file {
        Some(path) => load_seed_products(path).map_err(|e| e.to_string())?,
        None => sample_products(),
    };
    let store = InventoryStore::with_products(products).map_err(|e| e.to_string())?;
    let system = InventorySystem::start(config.channel_capacity, store);
    let client = system.inventory_client.clone();

    let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
    let value = client.inventory_value().await.map_err(|e| e.to_string())?;
    info!(products = snapshot.len(), inventory_value = %value, "Inventory loaded");
    for product in &snapshot {
        info!("{product}");
    }

    for key in [SortKey::Id, SortKey::Price, SortKey::Name] {
        let span = tracing::info_span!("sorting", key = %key);
        async {
            match client.sorted(key).await {
                Ok(sorted) => {
                    for product in &sorted {
                        info!("{product}");
                    }
                }
                Err(e) => error!(error = %e, "Sort failed"),
            }
        }
        .instrument(span)
        .await;
    }

    for query in [SearchQuery::Id(7), SearchQuery::Name("Mouse".to_string())] {
        let span = tracing::info_span!("searching", query = %query, algorithm = query.algorithm());
        async {
            match client.search(query.clone()).await {
                Ok(outcome) => match &outcome.product {
                    Some(product) => info!(iterations = outcome.iterations, "Found {product}"),
                    None => warn!(iterations = outcome.iterations, "No matching product"),
                },
                Err(e) => error!(error = %e, "Search failed"),
            }
        }
        .instrument(span)
        .await;
    }

    drop(client);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Inventory demo finished");
    Ok(())
}
