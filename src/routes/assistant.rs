//! Assistant chat routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use super::auth::SignedIn;
use crate::services::assistant::{self, ChatExchange, ChatMessage};
use crate::state::AppState;

/// `GET /api/assistant/messages`: the full transcript.
pub async fn transcript(State(state): State<AppState>, _auth: SignedIn) -> Json<Vec<ChatMessage>> {
    Json(assistant::transcript(&state).await)
}

#[derive(Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub text: String,
}

/// `POST /api/assistant/messages`: ask a question and wait for the reply.
pub async fn send(
    State(state): State<AppState>,
    _auth: SignedIn,
    Json(body): Json<MessageBody>,
) -> Result<Json<ChatExchange>, StatusCode> {
    assistant::send(&state, &body.text)
        .await
        .map(Json)
        .map_err(|_| StatusCode::BAD_REQUEST)
}
