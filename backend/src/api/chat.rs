//! Chat API
//!
//! `POST /api/chat`: exact-match against the FAQ dataset first, otherwise
//! forward the transcript to Gemini and score the answer.
//!
//! Upstream failures are returned as non-2xx responses; the client decides
//! how to degrade.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{error, info, warn};

use crate::api::models::{ChatRequest, ChatResponse};
use crate::api::utils::validate_message;
use crate::error::AppError;
use crate::gemini::build_transcript;
use crate::knowledge::{score_confidence, DATASET_CONFIDENCE, DATASET_LABEL};
use crate::state::SharedState;

/// Chat endpoint
///
/// This endpoint:
/// 1. Validates the message (400 if missing, not a string, or blank)
/// 2. Answers from the FAQ dataset on an exact match
/// 3. Otherwise builds the transcript from the trailing history window
/// 4. Calls Gemini and scores the answer with the confidence heuristic
pub async fn chat(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected chat payload");
        AppError::Validation("Message is required".to_string())
    })?;

    validate_message(&request.message)?;

    info!(
        message_len = request.message.len(),
        history_len = request.history.len(),
        language = request.language.as_deref().unwrap_or("en"),
        "Chat request received"
    );

    if let Some(answer) = state.faq.lookup(&request.message) {
        info!("Answered from FAQ dataset");
        return Ok(Json(ChatResponse {
            response: answer.to_string(),
            confidence: DATASET_CONFIDENCE,
            model: DATASET_LABEL.to_string(),
        }));
    }

    let transcript = build_transcript(
        &request.message,
        &request.history,
        state.history_window(),
        request.language.as_deref(),
    );

    let text = state.gemini.generate(&transcript).await.map_err(|e| {
        error!(error = %e, timeout = e.is_timeout(), "Chat error");
        AppError::from(e)
    })?;

    let confidence = score_confidence(&text);
    info!(
        response_len = text.len(),
        confidence = confidence,
        "Model response received"
    );

    Ok(Json(ChatResponse {
        response: text,
        confidence,
        model: state.model_label().to_string(),
    }))
}
