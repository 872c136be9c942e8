pub mod shipments;
pub mod storefront;
