//! Handles for talking to the inventory actor.

#[macro_use]
mod macros;
mod inventory_client;

pub use inventory_client::*;
