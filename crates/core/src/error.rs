//! Domain error model.

use thiserror::Error;

/// Result type used across the rental domain.
pub type RentalResult<T> = Result<T, RentalError>;

/// Rental-level error.
///
/// Every variant is terminal: callers get it back as-is, without extra context.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RentalError {
    /// The member cannot pay for the requested rental.
    #[error("not enough balance")]
    NotEnoughBalance,

    /// A requested item is missing, unavailable, or was requested twice.
    #[error("equipment not available")]
    EquipmentNotAvailable,

    /// No inventory entry carries the given name.
    #[error("not exists")]
    NotExists,

    /// An inventory entry with the same name is already present.
    #[error("already exists")]
    AlreadyExists,
}
