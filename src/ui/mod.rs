// UI module
// Terminal rendering for the chat REPL

pub mod components;
pub mod layout;

pub use components::{html_to_text, status_badge};
pub use layout::{render_answer, render_help, render_language_notice, render_sources, render_welcome};
