#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use parcelgate_api::config::{ServerConfig, StorefrontConfig};
use parcelgate_api::router::build_app_router;
use parcelgate_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and no storefront.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storefront: None,
    }
}

/// Build the full application router with all middleware layers and no
/// storefront credentials.
pub fn build_test_app() -> Router {
    build_app_router(AppState::from_config(test_config()))
}

/// Build the full application router with the storefront client pointed at
/// `api_url`.
pub fn build_test_app_with_storefront(api_url: &str) -> Router {
    let config = ServerConfig {
        storefront: Some(StorefrontConfig {
            store_id: "77".to_string(),
            token: "secret".to_string(),
            api_url: api_url.to_string(),
        }),
        ..test_config()
    };
    build_app_router(AppState::from_config(config))
}

/// Serve `upstream` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(upstream: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
