use std::sync::{Arc, RwLock};

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use shared_models::error::AppError;

use crate::models::SenderRole;
use crate::services::engine::TriageRuleEngine;
use crate::services::transcript::ChatTranscript;

pub struct TriageState {
    pub engine: TriageRuleEngine,
    pub transcript: RwLock<ChatTranscript>,
}

#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub text: String,
}

#[axum::debug_handler]
pub async fn get_transcript(
    State(state): State<Arc<TriageState>>,
) -> Result<Json<Value>, AppError> {
    let transcript = state
        .transcript
        .read()
        .map_err(|_| AppError::Internal("transcript lock poisoned".to_string()))?;

    Ok(Json(json!({
        "messages": transcript.messages(),
        "total": transcript.messages().len()
    })))
}

#[axum::debug_handler]
pub async fn post_message(
    State(state): State<Arc<TriageState>>,
    Json(incoming): Json<IncomingMessage>,
) -> Result<Json<Value>, AppError> {
    let guidance = state.engine.evaluate(&incoming.text);
    info!("triage classified message as {}", guidance.severity);

    let now = Utc::now();
    let mut transcript = state
        .transcript
        .write()
        .map_err(|_| AppError::Internal("transcript lock poisoned".to_string()))?;

    transcript.record(incoming.text, SenderRole::Requester, now);
    let reply = transcript
        .record(guidance.to_message_text(), SenderRole::Advisor, now)
        .clone();

    Ok(Json(json!({
        "message": reply,
        "guidance": guidance
    })))
}
