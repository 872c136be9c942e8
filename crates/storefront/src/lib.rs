//! CashCow storefront REST client.
//!
//! Typed wrappers over the store's order, product and navigation endpoints,
//! used to pull the data a shipment is prepared from.

pub mod api;
pub mod models;
pub mod params;

pub use api::{CashcowApi, StorefrontError};
pub use models::{Category, Order, OrderStatus, OrderUpdate, Product, ProductQuantity};
