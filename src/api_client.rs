// Backend API client
// HTTP access to the MITK backend: the health probe and the chat call.
// Each call carries its own timeout; nothing is retried.

use async_trait::async_trait;
use mitk_backend::api::models::{ChatRequest, ChatResponse, ErrorBody, HealthResponse};
use std::time::Duration;
use thiserror::Error;

/// Errors from the remote path
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The call did not finish within its timeout
    #[error("Request timeout after {0:?} - AI service is slow")]
    Timeout(Duration),

    /// The backend answered with a non-success status
    #[error("Backend error {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// `details`, `error`, or the status reason, whichever is present
        message: String,
    },

    /// Connection refused, DNS failure, and similar
    #[error("Backend unreachable: {0}")]
    Transport(String),

    /// The body did not match the expected JSON shape
    #[error("Malformed backend response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Whether this error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, RemoteError::Timeout(_))
    }
}

/// The remote half of the resolution pipeline
#[async_trait]
pub trait RemoteAssistant: Send + Sync {
    /// Reachability probe
    async fn check_health(&self) -> Result<HealthResponse, RemoteError>;

    /// Ask the backend to answer a message
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, RemoteError>;
}

/// reqwest-backed client for the MITK backend
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    chat_timeout: Duration,
    health_timeout: Duration,
}

impl BackendClient {
    /// Create a client for a backend base URL
    pub fn new(base_url: &str, chat_timeout: Duration, health_timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            chat_timeout,
            health_timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_send_error(error: reqwest::Error, timeout: Duration) -> RemoteError {
        if error.is_timeout() {
            RemoteError::Timeout(timeout)
        } else if error.is_decode() {
            RemoteError::Decode(error.to_string())
        } else {
            RemoteError::Transport(error.to_string())
        }
    }

    async fn error_from(response: reqwest::Response) -> RemoteError {
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.details.unwrap_or(body.error),
            Err(_) => reason,
        };
        RemoteError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl RemoteAssistant for BackendClient {
    async fn check_health(&self) -> Result<HealthResponse, RemoteError> {
        let timeout = self.health_timeout;
        let response = self
            .http
            .get(self.url("/api/health"))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| Self::map_send_error(e, timeout))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<HealthResponse>()
            .await
            .map_err(|e| Self::map_send_error(e, timeout))
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, RemoteError> {
        let timeout = self.chat_timeout;
        tracing::debug!(
            message_len = request.message.len(),
            history_len = request.history.len(),
            "Calling backend chat API"
        );

        let response = self
            .http
            .post(self.url("/api/chat"))
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| Self::map_send_error(e, timeout))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| Self::map_send_error(e, timeout))
    }
}
