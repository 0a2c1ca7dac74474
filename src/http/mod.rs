//! HTTP server module.
//!
//! Binds the router with `axum-server` and drains connections gracefully
//! on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
