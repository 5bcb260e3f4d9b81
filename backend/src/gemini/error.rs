//! Gemini-specific error types
//!
//! Errors that can occur while calling the Gemini API (transport, status, timeout).

use thiserror::Error;

/// Errors that can occur during a Gemini API call
#[derive(Error, Debug)]
pub enum GeminiError {
    /// The API answered with a non-success HTTP status
    #[error("Gemini API error {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body (may be empty)
        body: String,
    },

    /// The request exceeded the configured client-side timeout
    #[error("Gemini API request timed out after {0} ms")]
    Timeout(u128),

    /// The request could not be sent or the body could not be read
    #[error("Failed to reach Gemini API: {0}")]
    Transport(String),

    /// The response body was not valid JSON
    #[error("Failed to parse JSON response from Gemini API: {0}")]
    MalformedPayload(String),

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl GeminiError {
    /// Whether this error is a client-side timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, GeminiError::Timeout(_))
    }
}
