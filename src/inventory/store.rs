use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::{eq_ignore_case, Product, ProductRef};
use super::InventoryError;

/// In-memory product inventory.
///
/// Products are held in insertion order and indexed by barcode. Both views
/// point at the same `Arc<Product>`; only `add` and `remove` touch them, so
/// the barcode sets of the two views are always equal.
#[derive(Debug, Default)]
pub struct InventoryStore {
    products: Vec<ProductRef>,
    by_barcode: HashMap<String, ProductRef>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an explicit list of initial products.
    ///
    /// # Errors
    /// Stops at the first product that `add` rejects.
    pub fn with_products(initial: impl IntoIterator<Item = Product>) -> Result<Self, InventoryError> {
        let mut store = Self::new();
        for product in initial {
            store.add(product)?;
        }
        info!(count = store.len(), "Inventory seeded");
        Ok(store)
    }

    /// Returns a fresh copy of the insertion-ordered view.
    pub fn snapshot(&self) -> Vec<ProductRef> {
        self.products.clone()
    }

    /// Adds a product to both views.
    ///
    /// # Errors
    /// - `DuplicateKey` if the barcode is already stored (checked first)
    /// - `InvalidProduct` if the name is blank or price/stock is negative
    pub fn add(&mut self, product: Product) -> Result<ProductRef, InventoryError> {
        if self.by_barcode.contains_key(&product.barcode) {
            warn!(barcode = %product.barcode, "Rejected duplicate barcode");
            return Err(InventoryError::DuplicateKey(product.barcode));
        }
        validate(&product)?;

        let product = Arc::new(product);
        self.by_barcode.insert(product.barcode.clone(), Arc::clone(&product));
        self.products.push(Arc::clone(&product));

        debug!(barcode = %product.barcode, id = product.id, "Product added");
        Ok(product)
    }

    /// Removes the product with `barcode` from both views.
    ///
    /// Returns `false` when no such product is stored.
    pub fn remove(&mut self, barcode: &str) -> bool {
        let Some(product) = self.by_barcode.remove(barcode) else {
            debug!(barcode, "Nothing to remove");
            return false;
        };
        if let Some(position) = self.products.iter().position(|p| Arc::ptr_eq(p, &product)) {
            self.products.remove(position);
        }
        debug!(barcode, "Product removed");
        true
    }

    pub fn find_by_key(&self, barcode: &str) -> Option<ProductRef> {
        self.by_barcode.get(barcode).cloned()
    }

    pub fn exists(&self, barcode: &str) -> bool {
        self.by_barcode.contains_key(barcode)
    }

    /// Products whose category equals `category`, ignoring case, in insertion order.
    pub fn filter_by_category(&self, category: &str) -> Vec<ProductRef> {
        self.products
            .iter()
            .filter(|p| eq_ignore_case(&p.category, category))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of `price * stock` over every stored product.
    pub fn inventory_value(&self) -> Decimal {
        self.products.iter().map(|p| p.total_value()).sum()
    }
}

fn validate(product: &Product) -> Result<(), InventoryError> {
    if product.name.trim().is_empty() {
        return Err(InventoryError::InvalidProduct("name must not be empty".to_string()));
    }
    if product.price < Decimal::ZERO {
        return Err(InventoryError::InvalidProduct(format!(
            "price must not be negative: {}",
            product.price
        )));
    }
    if product.stock < 0 {
        return Err(InventoryError::InvalidProduct(format!(
            "stock must not be negative: {}",
            product.stock
        )));
    }
    Ok(())
}
