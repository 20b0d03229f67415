//! Stateless sorting and searching over product sequences.
//!
//! Everything here works on `ProductRef` sequences (typically a store
//! snapshot) and never mutates a product. Searches report how many probes
//! they made alongside the result.

pub mod searching;
pub mod sorting;

pub use searching::*;
pub use sorting::*;
