//! Gemini module
//!
//! Direct HTTP access to the Gemini `generateContent` endpoint, the wire
//! types it speaks, and the transcript builder that turns a chat history
//! into a single prompt.

pub mod client;
pub mod error;
pub mod transcript;
pub mod types;

pub use client::{GeminiClient, NO_RESPONSE_TEXT};
pub use error::GeminiError;
pub use transcript::{build_transcript, SYSTEM_PROMPT};
