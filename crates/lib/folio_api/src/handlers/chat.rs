//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use folio_core::message::ChatResponse;
use serde::Deserialize;
use tracing::{info, warn};

use crate::AppState;
use crate::error::{AppError, AppResult};

/// Lenient view of the request body so a missing field is a validation
/// error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    message: Option<String>,
}

/// `POST /api/chat` — answer one chat message.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(body) = payload?;

    let message = body.message.ok_or_else(|| {
        warn!("no message in request data");
        AppError::Validation("No message provided".into())
    })?;

    let message = message.trim();
    if message.is_empty() {
        warn!("empty message received");
        return Err(AppError::Validation("Message cannot be empty".into()));
    }

    let len = message.chars().count();
    if len > state.config.max_message_len {
        warn!(len, "message too long");
        return Err(AppError::Validation(format!(
            "Message too long (max {} characters)",
            state.config.max_message_len
        )));
    }

    let preview: String = message.chars().take(50).collect();
    info!(%preview, "processing chat message");

    let reply = state.responder.reply(message).await;
    if reply.is_empty() {
        return Err(AppError::Internal("responder returned empty reply".into()));
    }

    Ok(Json(ChatResponse::success(reply)))
}
