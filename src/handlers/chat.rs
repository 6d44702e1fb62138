use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::ChatMessage;
use crate::services::wizard;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub step: &'static str,
    pub completed: bool,
}

// POST /api/chat
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let input = payload.message.trim().to_string();

    let mut session = state.session.lock().unwrap();
    let turn = {
        let db = state.db.lock().unwrap();
        wizard::process_utterance(&mut session, &db, &input)
    };

    Json(ChatResponse {
        reply: turn.reply,
        step: turn.step.as_str(),
        completed: turn.completed,
    })
}

// GET /api/chat/history
pub async fn history(State(state): State<Arc<AppState>>) -> Json<Vec<ChatMessage>> {
    let session = state.session.lock().unwrap();
    Json(session.log.clone())
}

// POST /api/chat/reset
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let mut session = state.session.lock().unwrap();
    session.reset();
    tracing::info!("session reset");
    Json(serde_json::json!({ "ok": true }))
}
