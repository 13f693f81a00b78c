use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{error, instrument};

use super::dto::SendMessageRequest;
use super::repo_types::Message;
use crate::error::ChatError;
use crate::openai::ChatMessage;
use crate::state::AppState;

pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/messages", get(list_messages).post(send_message))
        .route("/chat/context", get(get_context))
        .route("/chat", delete(clear_chat))
}

#[instrument(skip(state))]
pub async fn list_messages(State(state): State<AppState>) -> Json<Vec<Message>> {
    Json(state.chat.messages())
}

/// What the model would be sent next, system prompt first.
#[instrument(skip(state))]
pub async fn get_context(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.chat.context())
}

/// On failure the apology is already in the message list; the caller gets
/// 502 with the cause so it can raise a transient notice.
#[instrument(skip(state, payload))]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<Message>, (StatusCode, String)> {
    match state.chat.send_message(&payload.content).await {
        Ok(reply) => Ok(Json(reply)),
        Err(ChatError::EmptyInput) => {
            Err((StatusCode::BAD_REQUEST, "Message is empty".into()))
        }
        Err(e) => {
            error!(error = %e, "send_message failed");
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

#[instrument(skip(state))]
pub async fn clear_chat(State(state): State<AppState>) -> StatusCode {
    state.chat.clear().await;
    StatusCode::NO_CONTENT
}
