use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use parcelgate_core::error::CoreError;
use parcelgate_storefront::StorefrontError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`StorefrontError`] for upstream
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `parcelgate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The storefront API failed or answered with an error.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    /// Storefront routes were called without configured credentials.
    #[error("Storefront is not configured")]
    StorefrontNotConfigured,

    /// A resource that does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::UnknownField(_) | CoreError::InvalidValue { .. } => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    core.to_string(),
                ),
                CoreError::Catalog(msg) => {
                    tracing::error!(error = %msg, "Rule catalog error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Storefront errors ---
            AppError::Storefront(err) => {
                tracing::error!(error = %err, "Storefront request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "STOREFRONT_ERROR",
                    "The storefront request failed".to_string(),
                )
            }
            AppError::StorefrontNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "STOREFRONT_NOT_CONFIGURED",
                self.to_string(),
            ),

            // --- HTTP-specific errors ---
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
