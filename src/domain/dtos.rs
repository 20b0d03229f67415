// DTOs for Product
use rust_decimal::Decimal;

use crate::domain::Product;
use crate::inventory::InventoryError;

/// Raw field values for a new product, as typed into an entry form.
///
/// Every field is kept as text so the caller can hand over exactly what the
/// user entered; [`ProductInput::parse`] does the checking.
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub id: String,
    pub barcode: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
}

impl ProductInput {
    /// Parses the form fields into a [`Product`].
    ///
    /// # Errors
    /// Returns [`InventoryError::InvalidProduct`] when a field is blank, the
    /// id or stock is not an integer, the price is not a positive decimal,
    /// or the stock is negative.
    pub fn parse(&self) -> Result<Product, InventoryError> {
        let id = required("id", &self.id)?;
        let barcode = required("barcode", &self.barcode)?;
        let name = required("name", &self.name)?;
        let category = required("category", &self.category)?;
        let price = required("price", &self.price)?;
        let stock = required("stock", &self.stock)?;

        let id: i32 = id
            .parse()
            .map_err(|_| InventoryError::InvalidProduct(format!("id must be an integer: {id}")))?;

        let price = match price.parse::<Decimal>() {
            Ok(price) if price > Decimal::ZERO => price,
            _ => {
                return Err(InventoryError::InvalidProduct(format!(
                    "price must be a positive number: {price}"
                )))
            }
        };

        let stock = match stock.parse::<i32>() {
            Ok(stock) if stock >= 0 => stock,
            _ => {
                return Err(InventoryError::InvalidProduct(format!(
                    "stock must be a non-negative integer: {stock}"
                )))
            }
        };

        Ok(Product::new(id, name, barcode, category, price, stock))
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, InventoryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(InventoryError::InvalidProduct(format!("missing field: {field}")))
    } else {
        Ok(trimmed)
    }
}
