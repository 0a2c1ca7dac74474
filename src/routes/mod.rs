//! HTTP route handlers.
//!
//! The health probe lives at the root; versioned API routes are nested under
//! `/v1`. Unknown paths and unsupported methods fall through to JSON error
//! handlers so every response body is JSON.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod hello;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{API_VERSION, CACHE_CONTROL_NO_STORE};
use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Fallback for paths with no registered route.
async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for registered paths hit with an unsupported method.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Routes served under the `/v1` prefix.
fn v1_routes() -> Router {
    Router::new()
        .route("/hello", get(hello::hello))
        .method_not_allowed_fallback(method_not_allowed)
}

/// Creates the Axum router with all routes, fallbacks and response headers.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(health_routes)
        .nest(&format!("/{API_VERSION}"), v1_routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
