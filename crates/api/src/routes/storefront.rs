//! Route definitions for the storefront passthrough resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::storefront;
use crate::state::AppState;

/// Storefront routes, merged at the `/api/v1` root.
///
/// ```text
/// GET    /orders                   -> list_orders      (query passed through)
/// GET    /orders/{id}              -> get_order
/// GET    /orders/{id}/tracking     -> order_tracking   (?email)
/// GET    /products                 -> list_products    (query passed through)
/// GET    /products/{sku}/quantity  -> product_quantity (?product_id)
/// GET    /categories               -> list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(storefront::list_orders))
        .route("/orders/{id}", get(storefront::get_order))
        .route("/orders/{id}/tracking", get(storefront::order_tracking))
        .route("/products", get(storefront::list_products))
        .route("/products/{sku}/quantity", get(storefront::product_quantity))
        .route("/categories", get(storefront::list_categories))
}
