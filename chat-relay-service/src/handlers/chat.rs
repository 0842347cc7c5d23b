use crate::models::{ChatRequest, ChatReply};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// `POST /api/chat`: forward the message upstream and return the generated
/// reply. Each request is fully independent of every other.
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let message = payload
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("message is required")))?;

    let reply = state
        .text_provider
        .generate(&message)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Relay to generative language service failed");
            AppError::from(e)
        })?;

    Ok(Json(ChatReply { reply }))
}
