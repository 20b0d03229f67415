//! # Inventory Sort
//!
//! An in-memory product inventory with instrumented sorting and searching.
//!
//! - **Domain** - [`Product`](domain::Product) records and raw form input → [`domain`]
//! - **Store** - one collection under an insertion-ordered view and a barcode index → [`inventory::InventoryStore`]
//! - **Algorithms** - partition sorts by id/price, merge sort by name, binary and linear search with probe counts → [`algorithms`]
//! - **Service** - an actor owning a store so async callers share it safely → [`actors::InventoryService`], [`clients::InventoryClient`]
//! - **System** - startup/shutdown, configuration and tracing → [`app_system`]
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_sort::algorithms::{binary_search_by_id, partition_sort_by_id};
//! use inventory_sort::domain::Product;
//! use inventory_sort::inventory::InventoryStore;
//! use rust_decimal::Decimal;
//!
//! let mut store = InventoryStore::new();
//! store.add(Product::new(7, "Auriculares", "7", "Electrónica", Decimal::from(1500), 25)).unwrap();
//! store.add(Product::new(3, "Teclado", "3", "Electrónica", Decimal::from(1200), 20)).unwrap();
//!
//! let sorted = partition_sort_by_id(store.snapshot());
//! let outcome = binary_search_by_id(&sorted, 7);
//! assert_eq!(outcome.product.unwrap().name, "Auriculares");
//! assert_eq!(outcome.iterations, 2);
//! ```

pub mod actors;
pub mod algorithms;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod inventory;
pub mod messages;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;
