use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Shared handle to a stored product.
///
/// The store's ordered view and its barcode index hold clones of the same
/// `Arc`, and snapshots hand those clones out, so sorting a snapshot never
/// copies or touches the products themselves.
pub type ProductRef = Arc<Product>;

/// Represents a product in the inventory.
///
/// The `barcode` is the unique key used by the store. The numeric `id` is a
/// secondary key for sorting and searching and is not checked for uniqueness.
/// Derived equality compares every field; the store itself keys on `barcode`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub barcode: String,
    pub category: String,
    pub price: Decimal,
    pub stock: i32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Numeric identifier used as sort/search key
    /// * `name` - Product name
    /// * `barcode` - Unique store key
    /// * `category` - Category label
    /// * `price` - Unit price
    /// * `stock` - Units available
    ///
    /// # Notes
    /// No validation happens here; the store checks the fields on insertion.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        barcode: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
        stock: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            barcode: barcode.into(),
            category: category.into(),
            price,
            stock,
        }
    }

    /// Value of the units on hand (`price * stock`).
    pub fn total_value(&self) -> Decimal {
        self.price * Decimal::from(self.stock)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let price = format!("{:.2}", self.price);
        write!(
            f,
            "[ID:{:>3} | {} | {:<15} | {:>8} | Stock: {:>3} | {}]",
            self.id, self.barcode, self.name, price, self.stock, self.category
        )
    }
}

/// Compares two strings ignoring case: both sides are folded to uppercase,
/// then compared ordinally. Punctuation between `Z` and `a` sorts after letters.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}

/// Case-insensitive equality, consistent with [`cmp_ignore_case`].
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    cmp_ignore_case(a, b) == Ordering::Equal
}
