//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

use crate::config::HEALTH_STATUS;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
/// Query parameters are ignored.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_payload() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"healthy"}"#
        );
    }
}
