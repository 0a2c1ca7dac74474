//! hello-service: a minimal JSON greeting service.
//!
//! Exposes `GET /health` and `GET /v1/hello`, built on axum. The router is
//! exported so it can be served by the binary or driven directly in tests.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::*;
pub use routes::create_router;
