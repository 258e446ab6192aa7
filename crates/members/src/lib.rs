//! Members domain module.
//!
//! A member holds a cash balance and rents equipment out of an inventory it
//! only borrows for the duration of the rental.

pub mod member;

pub use member::Member;
