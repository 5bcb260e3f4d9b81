// State management module
// Handles the chat session: history, language and remote-path health

pub mod history;
pub mod session;

pub use history::{ConversationHistory, Message, Role};
pub use session::{ChatSession, Language, RemoteStatus};
