//! Inventory domain module.
//!
//! This crate contains the rentable equipment records and the collection that
//! owns them, implemented as deterministic in-memory logic (no IO, no storage).

pub mod equipment;
pub mod inventory;

pub use equipment::Equipment;
pub use inventory::Inventory;
