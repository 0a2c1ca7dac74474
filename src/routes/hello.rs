//! Versioned greeting endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::Serialize;

use crate::config::{API_VERSION, DEFAULT_GREETING_NAME};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// Format the greeting for `name`. The name is inserted verbatim.
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}! ({API_VERSION})")
}

/// Greeting handler.
///
/// Reads the optional `name` query parameter (last occurrence wins) and
/// falls back to `"World"` when it is absent. An empty value is kept as-is.
pub async fn hello(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<GreetingResponse>, AppError> {
    // Form decoding of string pairs is lossy and does not reject; mapping the rejection
    // keeps any extractor failure in the JSON error shape.
    let Query(params) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let name = params
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == "name").then_some(value));

    let message = greeting(name.as_deref().unwrap_or(DEFAULT_GREETING_NAME));
    tracing::debug!(%message, "Greeting built");

    Ok(Json(GreetingResponse { message }))
}
