use thiserror::Error;

/// Errors that can occur when adding products to the inventory.
///
/// Absence is never an error: lookups, removal and searches report it
/// through `Option`/`bool` results instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Barcode already exists: {0}")]
    DuplicateKey(String),
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
}
