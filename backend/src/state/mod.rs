// State management module
// Holds the read-only server state shared by all handlers

pub mod app_state;

pub use app_state::{AppState, SharedState};
