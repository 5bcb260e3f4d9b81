//! MITK Assistant Backend Library
//!
//! This library exposes modules for testing and for the chat client, which
//! shares the wire models and the FAQ store. The server binary is in
//! `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod gemini;
pub mod knowledge;
/// Application state management
///
/// Read-only state shared by the request handlers.
pub mod state;
