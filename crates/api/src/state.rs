use std::sync::Arc;

use parcelgate_core::shipment::RuleCatalog;
use parcelgate_storefront::CashcowApi;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or `&'static`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Carrier rule catalog used for validation and encoding.
    pub catalog: &'static RuleCatalog,
    /// Storefront client, present when credentials are configured.
    pub storefront: Option<Arc<CashcowApi>>,
}

impl AppState {
    /// Build state from configuration, creating the storefront client if
    /// credentials are present.
    pub fn from_config(config: ServerConfig) -> Self {
        let storefront = config.storefront.as_ref().map(|sf| {
            Arc::new(CashcowApi::with_api_url(
                sf.api_url.clone(),
                sf.store_id.clone(),
                sf.token.clone(),
            ))
        });

        Self {
            config: Arc::new(config),
            catalog: RuleCatalog::standard(),
            storefront,
        }
    }

    /// The storefront client, or a 503 error when it is not configured.
    pub fn storefront(&self) -> Result<&CashcowApi, AppError> {
        self.storefront
            .as_deref()
            .ok_or(AppError::StorefrontNotConfigured)
    }
}
