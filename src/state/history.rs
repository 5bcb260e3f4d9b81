// Conversation history
// Append-only list of messages exchanged in the current session

use chrono::{DateTime, Utc};
use mitk_backend::api::models::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from the user
    User,
    /// Message from the assistant
    Assistant,
}

impl Role {
    /// Wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single message; never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent it
    pub role: Role,
    /// Message text (HTML for assistant answers)
    pub content: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current time
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Wire form sent to the backend
    pub fn to_entry(&self) -> HistoryEntry {
        HistoryEntry {
            role: Some(self.role.as_str().to_string()),
            content: Some(self.content.clone()),
        }
    }
}

/// Ordered conversation history, oldest first
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drop every message (new chat)
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been exchanged
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The last `window` messages in wire form
    pub fn recent_entries(&self, window: usize) -> Vec<HistoryEntry> {
        let start = self.messages.len().saturating_sub(window);
        self.messages[start..].iter().map(Message::to_entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_entries_are_bounded() {
        let mut history = ConversationHistory::new();
        for i in 0..25 {
            let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
            history.push(Message::new(role, format!("m{}", i)));
        }

        for window in [0, 1, 6, 100] {
            assert!(history.recent_entries(window).len() <= window);
        }

        let recent = history.recent_entries(6);
        assert_eq!(recent.len(), 6);
        assert_eq!(recent[0].content.as_deref(), Some("m19"));
        assert_eq!(recent[5].content.as_deref(), Some("m24"));
        assert_eq!(recent[5].role.as_deref(), Some("user"));
    }

    #[test]
    fn test_clear_resets_history() {
        let mut history = ConversationHistory::new();
        history.push(Message::new(Role::User, "hello"));
        assert_eq!(history.len(), 1);
        history.clear();
        assert!(history.is_empty());
        assert!(history.recent_entries(6).is_empty());
    }

    #[test]
    fn test_message_serializes_lowercase_role() {
        let message = Message::new(Role::Assistant, "hi");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "assistant");
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }
}
