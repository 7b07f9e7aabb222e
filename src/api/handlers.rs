//! HTTP API handlers.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// Human-readable service message.
    pub message: &'static str,
}

/// API root response.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    /// Service name and version string.
    pub message: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        message: "Smart Academy API is running",
    })
}

/// API root handler - returns the service version string.
pub async fn api_info() -> impl IntoResponse {
    Json(ApiInfoResponse {
        message: "Smart Academy API v1.0",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_body_serializes_exactly() {
        let body = serde_json::to_string(&HealthResponse {
            status: "ok",
            message: "Smart Academy API is running",
        })
        .unwrap();

        assert_eq!(
            body,
            r#"{"status":"ok","message":"Smart Academy API is running"}"#
        );
    }

    #[test]
    fn api_info_body_serializes_exactly() {
        let body = serde_json::to_string(&ApiInfoResponse {
            message: "Smart Academy API v1.0",
        })
        .unwrap();

        assert_eq!(body, r#"{"message":"Smart Academy API v1.0"}"#);
    }
}
