//! Handlers for the storefront passthrough resources.
//!
//! Each handler forwards to the configured [`CashcowApi`] client. Without
//! credentials every route answers 503; upstream failures answer 502.
//!
//! [`CashcowApi`]: parcelgate_storefront::CashcowApi

use axum::extract::{Path, Query, State};
use axum::Json;
use parcelgate_storefront::{Category, Order, Product};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for order tracking.
#[derive(Debug, Deserialize)]
pub struct TrackingParams {
    pub email: String,
}

/// GET /api/v1/orders
///
/// Query parameters are forwarded verbatim (e.g. `page`, `page_size`).
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> AppResult<Json<DataResponse<Vec<Order>>>> {
    let orders = state.storefront()?.orders(&as_pairs(&query)).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /api/v1/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DataResponse<Order>>> {
    let order = state
        .storefront()?
        .order(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {id} not found")))?;
    Ok(Json(DataResponse { data: order }))
}

/// GET /api/v1/orders/{id}/tracking?email=...
pub async fn order_tracking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<TrackingParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    if params.email.trim().is_empty() {
        return Err(AppError::BadRequest("email is required".into()));
    }
    let tracking = state
        .storefront()?
        .order_tracking(id, params.email.trim())
        .await?;
    Ok(Json(DataResponse { data: tracking }))
}

/// GET /api/v1/products
///
/// Query parameters are forwarded verbatim (e.g. `page`, `page_size`).
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let products = state.storefront()?.products(&as_pairs(&query)).await?;
    Ok(Json(DataResponse { data: products }))
}

/// Query parameters for a product's stock level.
#[derive(Debug, Deserialize)]
pub struct QuantityParams {
    pub product_id: i64,
}

/// Stock level of one product.
#[derive(Debug, Serialize)]
pub struct ProductStock {
    pub sku: String,
    pub product_id: i64,
    pub qty: f64,
}

/// GET /api/v1/products/{sku}/quantity?product_id=...
///
/// Products the store does not list under `sku` report a quantity of 0.
pub async fn product_quantity(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    Query(params): Query<QuantityParams>,
) -> AppResult<Json<DataResponse<ProductStock>>> {
    let qty = state
        .storefront()?
        .product_single_quantity(&sku, params.product_id)
        .await?;
    Ok(Json(DataResponse {
        data: ProductStock {
            sku,
            product_id: params.product_id,
            qty,
        },
    }))
}

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = state.storefront()?.categories().await?;
    Ok(Json(DataResponse { data: categories }))
}

fn as_pairs(query: &[(String, String)]) -> Vec<(&str, &str)> {
    query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}
