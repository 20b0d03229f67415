//! Business entities for the inventory. Pure data, no store or actor concerns.

pub mod dtos;
pub mod product;

pub use dtos::*;
pub use product::*;
