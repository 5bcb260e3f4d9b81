//! Gemini API client
//!
//! Direct HTTP client for calling the Gemini `generateContent` endpoint.
//! One request per chat message; no retries.

use crate::config::GeminiConfig;
use crate::gemini::error::GeminiError;
use crate::gemini::types::{GeminiApiRequest, GeminiApiResponse, GenerationConfig};
use std::time::Duration;

/// Answer substituted when the response carries no candidate text
pub const NO_RESPONSE_TEXT: &str = "Sorry, I could not generate a response.";

/// Gemini HTTP client
///
/// Wraps a shared `reqwest::Client` (connection pooling) whose request
/// timeout aborts a slow call.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    generation: GenerationConfig,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    /// * Returns `GeminiError::ClientBuild` if the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeminiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            generation: GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            },
            timeout: config.timeout,
        })
    }

    /// Model name used in the request path
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a prompt and return the first candidate's text
    ///
    /// # Arguments
    /// * `prompt` - The full transcript to send
    ///
    /// # Returns
    /// * `Ok(String)` - The answer text, or [`NO_RESPONSE_TEXT`] if the
    ///   response carried no text
    /// * `Err(GeminiError)` - Non-success status, timeout, transport failure,
    ///   or a body that is not JSON
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        let request_body = GeminiApiRequest::from_prompt(prompt, self.generation);

        tracing::debug!(
            url = %url,
            model = %self.model,
            prompt_len = prompt.len(),
            "Calling Gemini API"
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();

            tracing::error!(
                status_code = status_code,
                error_body = %body,
                "Gemini API returned error status"
            );

            return Err(GeminiError::Status {
                status: status_code,
                body,
            });
        }

        let response_body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let parsed: GeminiApiResponse = serde_json::from_str(&response_body).map_err(|e| {
            tracing::error!(error = %e, "Gemini API returned a body that is not JSON");
            GeminiError::MalformedPayload(e.to_string())
        })?;

        if let Some(reason) = parsed.block_reason() {
            tracing::warn!(block_reason = %reason, "Gemini API blocked the prompt");
        }

        let text = match parsed.first_text() {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!("Gemini API response had no candidate text");
                NO_RESPONSE_TEXT.to_string()
            }
        };

        tracing::debug!(
            response_len = text.len(),
            "Successfully received response from Gemini API"
        );

        Ok(text)
    }

    fn map_transport_error(&self, error: reqwest::Error) -> GeminiError {
        if error.is_timeout() {
            tracing::warn!(
                timeout_ms = self.timeout.as_millis() as u64,
                "Gemini API request timed out"
            );
            GeminiError::Timeout(self.timeout.as_millis())
        } else {
            GeminiError::Transport(error.to_string())
        }
    }
}
