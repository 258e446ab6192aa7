//! `rentledger-core` — shared building blocks for the rental ledger.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{RentalError, RentalResult};
