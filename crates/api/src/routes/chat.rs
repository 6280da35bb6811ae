//! FAQ chat assistant endpoints.

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AppState, error::ApiResult, extract::ApiJson};
use kodestudio_core::faq::{self, GREETING};
use kodestudio_shared::AppError;

/// Creates the chat routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/chat/greeting", get(greeting))
        .route("/chat", post(chat))
}

/// Chat message from the widget.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// What the visitor typed.
    #[serde(default)]
    pub message: String,
}

/// Assistant reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Reply text.
    pub reply: &'static str,
    /// Matched intent, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<&'static str>,
}

/// GET `/chat/greeting` - Opening line for a new conversation.
async fn greeting() -> Json<ChatResponse> {
    Json(ChatResponse {
        reply: GREETING,
        intent: None,
    })
}

/// POST `/chat` - Answer a visitor message.
async fn chat(ApiJson(payload): ApiJson<ChatRequest>) -> ApiResult<Json<ChatResponse>> {
    if payload.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".into()).into());
    }

    let intent = faq::detect_intent(&payload.message);
    debug!(intent = intent.map(|i| i.name), "chat message answered");

    Ok(Json(ChatResponse {
        reply: intent.map_or(faq::FALLBACK_REPLY, |i| i.response),
        intent: intent.map(|i| i.name),
    }))
}
