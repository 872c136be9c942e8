pub mod health;
pub mod shipments;
pub mod storefront;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /shipments/schema                                field descriptors (GET)
/// /shipments/validate                              validate a record (POST)
/// /shipments/encode                                encode a record (POST)
///
/// /orders                                          list orders (GET)
/// /orders/{id}                                     single order (GET)
/// /orders/{id}/tracking                            tracking info (GET, ?email)
/// /products                                        list products (GET)
/// /products/{sku}/quantity                         stock of one product (GET, ?product_id)
/// /categories                                      website navigation (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/shipments", shipments::router())
        .merge(storefront::router())
}
