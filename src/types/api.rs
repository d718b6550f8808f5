//! The `/api/chat` request and response bodies.

use serde::{Deserialize, Serialize};

use super::message::Turn;

/// Request body: the full conversation so far. The upstream API is
/// stateless between calls, so every submission carries the whole history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Turn>,
}

/// Success body. `reply` is optional on the way in so the client can treat
/// a bodyless `{}` response as a distinct empty outcome rather than a
/// decode failure; the server always sets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<Turn>,
}

/// Failure body. The reason stays in the server log; the client only ever
/// sees this generic message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
