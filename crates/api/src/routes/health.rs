use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when every integration is available, `degraded` when the
    /// shipment engine runs without a storefront.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether storefront credentials are configured.
    pub storefront_configured: bool,
    /// Rules in the loaded carrier catalog.
    pub catalog_rules: usize,
    /// Fields the catalog classifies as numeric.
    pub numeric_fields: usize,
}

/// GET /health -- returns service health and the loaded catalog's shape.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let storefront_configured = state.storefront.is_some();

    Json(HealthResponse {
        status: if storefront_configured { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        storefront_configured,
        catalog_rules: state.catalog.rules().len(),
        numeric_fields: state.catalog.numeric_fields().count(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
