// Chat session state
// Everything that lives for one conversation: history, language,
// remote-path health and the last answer shown

use crate::pipeline::ResolvedResponse;
use crate::state::history::{ConversationHistory, Message, Role};

/// Health of the remote (backend + model) path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStatus {
    /// Remote path switched off in configuration
    Disabled,
    /// Probe not finished yet
    Connecting,
    /// Probe succeeded and no call has failed since
    Online,
    /// Probe or a chat call failed; stays offline for the session
    Offline,
}

impl RemoteStatus {
    /// Whether chat requests should go to the backend
    pub fn is_available(&self) -> bool {
        matches!(self, RemoteStatus::Online)
    }

    /// Status indicator text
    pub fn label(&self) -> &'static str {
        match self {
            RemoteStatus::Disabled => "🟡 Local Mode",
            RemoteStatus::Connecting => "Connecting...",
            RemoteStatus::Online => "🟢 AI Ready",
            RemoteStatus::Offline => "🔴 AI Offline",
        }
    }
}

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Kannada
    Kannada,
}

/// Translated UI strings
pub struct Translations {
    /// Greeting shown in the welcome banner
    pub welcome: &'static str,
    /// Prompt inviting a question
    pub ask_anything: &'static str,
    /// Name of the language in itself
    pub name: &'static str,
    /// Notice shown when the remote path goes offline
    pub backend_offline: &'static str,
}

const ENGLISH: Translations = Translations {
    welcome: "Hello! 👋 I'm your MITK AI Assistant, powered by Google Gemini AI. I can answer detailed questions about Moodlakatte Institute of Technology, Kundapura.",
    ask_anything: "What would you like to know about MITK?",
    name: "English",
    backend_offline: "AI service is offline. Using local knowledge base.",
};

const KANNADA: Translations = Translations {
    welcome: "ನಮಸ್ಕಾರ! 👋 ನಾನು ನಿಮ್ಮ MITK AI ಸಹಾಯಕ. Google Gemini AI ಶಕ್ತಿಯಿಂದ ಚಾಲಿತ.",
    ask_anything: "MITK ಬಗ್ಗೆ ನೀವು ಏನು ತಿಳಿದುಕೊಳ್ಳಲು ಬಯಸುತ್ತೀರಿ?",
    name: "ಕನ್ನಡ",
    backend_offline: "AI ಸೇವೆ ಆಫ್ಲೈನ್. ಸ್ಥಳೀಯ ಜ್ಞಾನ ಬಳಸುತ್ತಿದ್ದೇನೆ.",
};

impl Language {
    /// Code sent to the backend
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Kannada => "kn",
        }
    }

    /// The other language
    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Kannada,
            Language::Kannada => Language::English,
        }
    }

    /// UI strings for this language
    pub fn strings(&self) -> &'static Translations {
        match self {
            Language::English => &ENGLISH,
            Language::Kannada => &KANNADA,
        }
    }
}

/// State of one chat session
///
/// A turn borrows the session mutably from start to finish, so there is never
/// more than one request in flight.
#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Messages exchanged so far
    pub history: ConversationHistory,
    /// Current UI language
    pub language: Language,
    remote: RemoteStatus,
    last_response: Option<ResolvedResponse>,
}

impl ChatSession {
    /// Start a session; an enabled remote path begins in `Connecting`
    pub fn new(remote_enabled: bool) -> Self {
        Self {
            history: ConversationHistory::new(),
            language: Language::default(),
            remote: if remote_enabled {
                RemoteStatus::Connecting
            } else {
                RemoteStatus::Disabled
            },
            last_response: None,
        }
    }

    /// Current remote status
    pub fn remote_status(&self) -> RemoteStatus {
        self.remote
    }

    /// Record the outcome of the health probe
    pub fn record_probe(&mut self, healthy: bool) {
        if self.remote == RemoteStatus::Disabled {
            return;
        }
        self.remote = if healthy {
            RemoteStatus::Online
        } else {
            RemoteStatus::Offline
        };
    }

    /// Mark the remote path unhealthy after a failed call
    pub fn mark_remote_failed(&mut self) {
        if self.remote != RemoteStatus::Disabled {
            self.remote = RemoteStatus::Offline;
        }
    }

    /// Append a completed exchange to the history
    pub fn record_exchange(&mut self, question: &str, answer: &ResolvedResponse) {
        self.history.push(Message::new(Role::User, question));
        self.history.push(Message::new(Role::Assistant, answer.text.clone()));
        self.last_response = Some(answer.clone());
    }

    /// Most recent answer, for the sources view
    pub fn last_response(&self) -> Option<&ResolvedResponse> {
        self.last_response.as_ref()
    }

    /// Switch between English and Kannada
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Start a new chat; the remote status is kept
    pub fn reset(&mut self) {
        self.history.clear();
        self.last_response = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer() -> ResolvedResponse {
        ResolvedResponse::new("<p>Hi</p>", 90, vec!["Test".to_string()], None)
    }

    #[test]
    fn test_probe_outcomes() {
        let mut session = ChatSession::new(true);
        assert_eq!(session.remote_status(), RemoteStatus::Connecting);
        assert!(!session.remote_status().is_available());

        session.record_probe(true);
        assert!(session.remote_status().is_available());

        session.record_probe(false);
        assert_eq!(session.remote_status(), RemoteStatus::Offline);
        assert_eq!(session.remote_status().label(), "🔴 AI Offline");
    }

    #[test]
    fn test_disabled_remote_stays_disabled() {
        let mut session = ChatSession::new(false);
        session.record_probe(true);
        session.mark_remote_failed();
        assert_eq!(session.remote_status(), RemoteStatus::Disabled);
        assert_eq!(session.remote_status().label(), "🟡 Local Mode");
    }

    #[test]
    fn test_failure_flips_online_to_offline() {
        let mut session = ChatSession::new(true);
        session.record_probe(true);
        session.mark_remote_failed();
        assert_eq!(session.remote_status(), RemoteStatus::Offline);
    }

    #[test]
    fn test_record_exchange_and_reset() {
        let mut session = ChatSession::new(true);
        session.record_exchange("Hello", &answer());

        let messages = session.history.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].content, "<p>Hi</p>");
        assert!(session.last_response().is_some());

        session.record_probe(true);
        session.reset();
        assert!(session.history.is_empty());
        assert!(session.last_response().is_none());
        assert_eq!(session.remote_status(), RemoteStatus::Online);
    }

    #[test]
    fn test_language_toggle() {
        let mut session = ChatSession::new(false);
        assert_eq!(session.language.code(), "en");
        assert_eq!(session.toggle_language(), Language::Kannada);
        assert_eq!(session.language.code(), "kn");
        assert_eq!(session.language.strings().name, "ಕನ್ನಡ");
        assert_eq!(session.toggle_language(), Language::English);
    }
}
