//! Route definitions for the `/shipments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::shipments;
use crate::state::AppState;

/// Routes mounted at `/shipments`.
///
/// ```text
/// GET    /schema     -> schema
/// POST   /validate   -> validate
/// POST   /encode     -> encode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schema", get(shipments::schema))
        .route("/validate", post(shipments::validate))
        .route("/encode", post(shipments::encode))
}
