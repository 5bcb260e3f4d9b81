//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting:
//! `{ "error": ..., "details": ... }` with `details` omitted when there is none.

use crate::api::models::ErrorBody;
use crate::gemini::GeminiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The request payload is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// The upstream model failed (status, transport, or malformed payload)
    #[error("AI service error")]
    Upstream(#[source] GeminiError),

    /// The upstream model did not answer within the timeout
    #[error("AI service timeout")]
    Timeout(#[source] GeminiError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<GeminiError> for AppError {
    fn from(error: GeminiError) -> Self {
        if error.is_timeout() {
            AppError::Timeout(error)
        } else {
            AppError::Upstream(error)
        }
    }
}

impl AppError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            AppError::Upstream(source) | AppError::Timeout(source) => Some(source.to_string()),
            AppError::Validation(_) | AppError::Internal(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
            details: self.details(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_gateway_timeout() {
        let error = AppError::from(GeminiError::Timeout(30_000));
        assert!(matches!(error, AppError::Timeout(_)));
        assert_eq!(error.status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(error.to_string(), "AI service timeout");
    }

    #[test]
    fn test_status_error_keeps_details() {
        let error = AppError::from(GeminiError::Status {
            status: 503,
            body: "overloaded".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.details().unwrap(), "Gemini API error 503: overloaded");
    }

    #[test]
    fn test_validation_has_no_details() {
        let error = AppError::Validation("Message is required".to_string());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Message is required");
        assert!(error.details().is_none());
    }
}
