//! REST API client for the CashCow storefront.
//!
//! Wraps the store's HTTP API (orders, order tracking and updates, products,
//! stock, website navigation) using [`reqwest`]. Every call carries the
//! store id and API token.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::models::{Category, Order, OrderUpdate, Product, ProductQuantity, ResultEnvelope};
use crate::params::{self, Params};

/// Default base URL of the storefront API.
pub const DEFAULT_API_URL: &str = "https://api.cashcow.co.il/Api";

/// Template of the store website host serving navigation files.
pub const DEFAULT_WEBSITES_URL: &str = "https://{store_id}.websites.cashcow.co.il";

/// Errors from the storefront REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("Storefront API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not the JSON we expected.
    #[error("Invalid storefront response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for a single store.
#[derive(Debug, Clone)]
pub struct CashcowApi {
    client: reqwest::Client,
    api_url: String,
    websites_url: String,
    store_id: String,
    token: String,
}

impl CashcowApi {
    /// Create a client for the production API.
    pub fn new(store_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_API_URL, store_id, token)
    }

    /// Create a client against a custom base URL.
    pub fn with_api_url(
        api_url: impl Into<String>,
        store_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, store_id, token)
    }

    /// Create a client reusing an existing [`reqwest::Client`] against a
    /// custom base URL.
    pub fn with_client(
        client: reqwest::Client,
        api_url: impl Into<String>,
        store_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            websites_url: DEFAULT_WEBSITES_URL.to_string(),
            store_id: store_id.into(),
            token: token.into(),
        }
    }

    /// Override the website host template (`{store_id}` is substituted).
    pub fn with_websites_url(mut self, websites_url: impl Into<String>) -> Self {
        self.websites_url = websites_url.into();
        self
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// List store orders. `query` is merged over the default paging.
    pub async fn orders(&self, query: &[(&str, &str)]) -> Result<Vec<Order>, StorefrontError> {
        let envelope: ResultEnvelope<Order> =
            self.get("/Stores/Orders", params::paged(query).as_slice()).await?;
        Ok(envelope.result.unwrap_or_default())
    }

    /// Fetch one order by id.
    pub async fn order(&self, id: i64) -> Result<Option<Order>, StorefrontError> {
        let id = id.to_string();
        let orders = self.orders(&[("OrderID", id.as_str())]).await?;
        Ok(orders.into_iter().next())
    }

    /// Tracking number and comments of an order.
    pub async fn order_tracking(&self, id: i64, email: &str) -> Result<Value, StorefrontError> {
        let id = id.to_string();
        self.get(
            "/Stores/CheckOrderTracking",
            &[("order_id", id.as_str()), ("email_address", email)],
        )
        .await
    }

    /// Update an order's status, total, invoice and notes.
    pub async fn order_update(
        &self,
        id: i64,
        email: &str,
        update: &OrderUpdate,
    ) -> Result<Value, StorefrontError> {
        let form = params::order_update_form(id, email, update);
        self.post_form("/Stores/SendOrderUpdate", &form).await
    }

    /// List store products. `query` is merged over the default paging.
    pub async fn products(&self, query: &[(&str, &str)]) -> Result<Vec<Product>, StorefrontError> {
        let envelope: ResultEnvelope<Product> =
            self.get("/Products/GetProducts", params::paged(query).as_slice()).await?;
        Ok(envelope.result.unwrap_or_default())
    }

    /// Stock levels, filtered by `sku` or `category_id` in `query`.
    pub async fn products_quantity(
        &self,
        query: &[(&str, &str)],
    ) -> Result<Vec<ProductQuantity>, StorefrontError> {
        let envelope: ResultEnvelope<ProductQuantity> =
            self.get("/Products/GetQty", params::paged(query).as_slice()).await?;
        Ok(envelope.result.unwrap_or_default())
    }

    /// Stock of one product; `0.0` when the store does not list it.
    pub async fn product_single_quantity(
        &self,
        sku: &str,
        product_id: i64,
    ) -> Result<f64, StorefrontError> {
        let quantities = self.products_quantity(&[("sku", sku)]).await?;
        Ok(quantities
            .into_iter()
            .find(|item| item.product_id == product_id)
            .map_or(0.0, |item| item.qty))
    }

    /// Create or update a product by SKU.
    pub async fn product_update(
        &self,
        sku: &str,
        data: &Map<String, Value>,
    ) -> Result<Value, StorefrontError> {
        let body = params::product_update_body(&self.store_id, &self.token, sku, data);
        let url = format!("{}/Stores/CreateOrUpdatePrtoduct", self.api_url);
        tracing::debug!(store_id = %self.store_id, sku, "Storefront product upsert");

        let response = self.client.post(url).json(&body).send().await?;
        Self::parse_response(response).await
    }

    /// The store website's navigation tree (top, main and bottom menus).
    pub async fn categories(&self) -> Result<Vec<Category>, StorefrontError> {
        let mut categories = Vec::new();
        for url in params::navigation_urls(&self.websites_url, &self.store_id) {
            tracing::debug!(%url, "Fetching storefront navigation");
            let response = Self::ensure_success(self.client.get(url).send().await?).await?;
            let body = response.text().await?;
            let mut part: Vec<Category> = serde_json::from_str(params::strip_bom(&body))?;
            categories.append(&mut part);
        }
        Ok(categories)
    }

    // ---- private helpers ----

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(impl AsRef<str>, impl AsRef<str>)],
    ) -> Result<T, StorefrontError> {
        let request_params: Params = params::authenticated(&self.store_id, &self.token, query);
        tracing::debug!(store_id = %self.store_id, path, "Storefront GET");

        let response = self
            .client
            .get(format!("{}{path}", self.api_url))
            .query(&request_params)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<T, StorefrontError> {
        let request_params: Params = params::authenticated(&self.store_id, &self.token, form);
        tracing::debug!(store_id = %self.store_id, path, "Storefront POST");

        let response = self
            .client
            .post(format!("{}{path}", self.api_url))
            .form(&request_params)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code, or turn it into a
    /// [`StorefrontError::Api`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, StorefrontError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Storefront request failed");
            return Err(StorefrontError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StorefrontError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
