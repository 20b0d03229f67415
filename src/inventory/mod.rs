//! The inventory container: one authoritative collection of products kept
//! under two synchronized views (insertion order and barcode index).

pub mod error;
mod store;

pub use error::*;
pub use store::*;
