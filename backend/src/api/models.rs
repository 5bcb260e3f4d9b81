//! API request/response models
//!
//! Wire types for `/api/health` and `/api/chat`. The chat client reuses them,
//! so both sides agree on the JSON shape.

use serde::{Deserialize, Serialize};

/// One prior turn sent by the client
///
/// Both fields are optional on the wire; incomplete entries are skipped when
/// the transcript is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// `user` or `assistant`
    #[serde(default)]
    pub role: Option<String>,
    /// Message text
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The new user message (required, non-empty)
    #[serde(default)]
    pub message: String,
    /// Prior turns, oldest first
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// UI language code (`en`, `kn`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Successful `POST /api/chat` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Raw answer text (markdown from the model, or a dataset answer)
    pub response: String,
    /// Heuristic confidence, 0-100
    pub confidence: u8,
    /// Label of the path that produced the answer
    pub model: String,
}

/// `GET /api/health` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `OK` when the server answers
    pub status: String,
    /// Human-readable status line
    pub message: String,
    /// Label of the configured model
    pub model: String,
    /// Server time, RFC 3339
    pub time: String,
}

/// Error body returned with every non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short error description
    pub error: String,
    /// Underlying cause, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
