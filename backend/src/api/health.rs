//! Health check endpoint
//!
//! Cheap reachability probe used by the chat client at session start.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};

use crate::api::models::HealthResponse;
use crate::state::SharedState;

/// `GET /api/health`
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "MITK AI Backend is running".to_string(),
        model: state.model_label().to_string(),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
