use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Fixed body for the `GET /` liveness probe. Independent of credential
/// configuration.
pub const LIVENESS_MESSAGE: &str = "Chat relay service up and running.";

/// Liveness probe.
pub async fn index() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check endpoint for Docker/K8s probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "chat-relay-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
