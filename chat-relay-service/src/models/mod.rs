use serde::{Deserialize, Serialize};

/// Inbound body for `POST /api/chat`.
///
/// `message` is optional at the deserialization layer so its absence can be
/// answered with an explicit 400 instead of a generic body rejection.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// Outbound body for a successful `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}
