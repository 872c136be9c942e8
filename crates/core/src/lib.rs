//! Parcelgate core library.
//!
//! Carrier shipment records, the declarative rule catalog that governs them,
//! the validation engine and the positional encoder. Everything here is pure
//! logic with no I/O.

pub mod error;
pub mod shipment;

pub use shipment::{encode, validate};
