//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are driven through `tower::ServiceExt::oneshot` against the
//! same router (and middleware stack) the production binary uses; the
//! three upstream APIs are pointed at a mockito stub server.

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use multiverse_api::config::{ServerConfig, UpstreamConfig};
use multiverse_api::router::build_app_router;
use multiverse_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Upstream configuration pointing every client at the given stub
/// server. The key pair matches the Marvel docs example so signed
/// requests are predictable.
pub fn test_upstreams(base_url: &str) -> UpstreamConfig {
    UpstreamConfig {
        marvel_base_url: base_url.to_string(),
        marvel_public_key: "1234".to_string(),
        marvel_private_key: "abcd".to_string(),
        pokeapi_base_url: base_url.to_string(),
        rickandmorty_base_url: base_url.to_string(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and upstream stub URL.
pub fn build_test_app(pool: PgPool, upstream_base_url: &str) -> Router {
    let config = test_config();
    let state = AppState::new(pool, &test_upstreams(upstream_base_url));
    build_app_router(state, &config)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request"),
    )
    .await
    .expect("request failed")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body was not valid JSON")
}
