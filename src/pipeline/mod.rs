// Response resolution pipeline
// ExactMatch -> RemoteModel -> Fallback -> Resolved, one turn at a time

pub mod fallback;
pub mod format;
pub mod response;

pub use format::format_response;
pub use response::{ResolvedResponse, ASSISTANT_LABEL};

use crate::api_client::RemoteAssistant;
use crate::state::{ChatSession, RemoteStatus};
use mitk_backend::api::models::ChatRequest;
use mitk_backend::knowledge::{FaqStore, DATASET_CONFIDENCE, DATASET_LABEL};
use tracing::{debug, info, warn};

/// Stage that produced an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Local dataset hit
    ExactMatch,
    /// Backend answered
    RemoteModel,
    /// Keyword fallback
    Fallback,
}

/// Answers one message per call, threading the session through
pub struct Resolver<R: RemoteAssistant> {
    faq: FaqStore,
    remote: R,
    history_window: usize,
}

impl<R: RemoteAssistant> Resolver<R> {
    /// Create a resolver
    pub fn new(faq: FaqStore, remote: R, history_window: usize) -> Self {
        Self {
            faq,
            remote,
            history_window,
        }
    }

    /// Probe backend health and record the outcome on the session
    pub async fn establish_health(&self, session: &mut ChatSession) {
        if session.remote_status() == RemoteStatus::Disabled {
            debug!("Remote path disabled, skipping health probe");
            return;
        }

        match self.remote.check_health().await {
            Ok(health) => {
                info!(model = %health.model, "Backend connected");
                session.record_probe(true);
            }
            Err(e) => {
                warn!(error = %e, "Backend health check failed, using local knowledge");
                session.record_probe(false);
            }
        }
    }

    /// Resolve one message and append the exchange to the session history
    ///
    /// Never fails: every remote error degrades to the local fallback.
    pub async fn resolve(&self, session: &mut ChatSession, message: &str) -> ResolvedResponse {
        let (stage, response) = self.resolve_stage(session, message).await;
        debug!(?stage, confidence = response.confidence, "Message resolved");
        session.record_exchange(message, &response);
        response
    }

    async fn resolve_stage(
        &self,
        session: &mut ChatSession,
        message: &str,
    ) -> (Stage, ResolvedResponse) {
        if let Some(answer) = self.faq.lookup(message) {
            let response = ResolvedResponse::new(
                format_response(answer),
                DATASET_CONFIDENCE,
                vec![ASSISTANT_LABEL.to_string(), DATASET_LABEL.to_string()],
                Some(DATASET_LABEL.to_string()),
            );
            return (Stage::ExactMatch, response);
        }

        if session.remote_status().is_available() {
            let request = ChatRequest {
                message: message.to_string(),
                history: session.history.recent_entries(self.history_window),
                language: Some(session.language.code().to_string()),
            };

            match self.remote.chat(&request).await {
                Ok(reply) => {
                    let response = ResolvedResponse::new(
                        format_response(&reply.response),
                        reply.confidence,
                        vec![ASSISTANT_LABEL.to_string(), reply.model.clone()],
                        Some(reply.model),
                    );
                    return (Stage::RemoteModel, response);
                }
                Err(e) if e.is_timeout() => {
                    warn!(error = %e, "Backend timed out, switching to local knowledge");
                    session.mark_remote_failed();
                }
                Err(e) => {
                    warn!(error = %e, "Backend call failed, switching to local knowledge");
                    session.mark_remote_failed();
                }
            }
        }

        (Stage::Fallback, fallback::resolve(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::RemoteError;
    use async_trait::async_trait;
    use mitk_backend::api::models::{ChatResponse, HealthResponse};
    use mitk_backend::knowledge::FaqEntry;
    use std::sync::Mutex;
    use std::time::Duration;

    enum Behaviour {
        Answer,
        Timeout,
        Refused,
    }

    struct FakeRemote {
        behaviour: Behaviour,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl FakeRemote {
        fn new(behaviour: Behaviour) -> Self {
            Self {
                behaviour,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl RemoteAssistant for FakeRemote {
        async fn check_health(&self) -> Result<HealthResponse, RemoteError> {
            match self.behaviour {
                Behaviour::Refused => Err(RemoteError::Transport("connection refused".into())),
                _ => Ok(HealthResponse {
                    status: "OK".into(),
                    message: "MITK AI Backend is running".into(),
                    model: "Gemini".into(),
                    time: "2024-01-01T00:00:00.000Z".into(),
                }),
            }
        }

        async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, RemoteError> {
            self.requests.lock().unwrap().push(request.clone());
            match self.behaviour {
                Behaviour::Answer => Ok(ChatResponse {
                    response: "MITK offers **BE** programs".into(),
                    confidence: 93,
                    model: "Gemini".into(),
                }),
                Behaviour::Timeout => Err(RemoteError::Timeout(Duration::from_secs(15))),
                Behaviour::Refused => Err(RemoteError::Transport("connection refused".into())),
            }
        }
    }

    fn faq() -> FaqStore {
        FaqStore::new(vec![
            FaqEntry {
                question: "What is the fee structure?".into(),
                answer: "Contact the office for the current fee structure.".into(),
            },
            FaqEntry {
                question: "Is there a hostel?".into(),
                answer: "Yes, separate hostels for boys and girls.".into(),
            },
        ])
    }

    async fn online(remote: FakeRemote, window: usize) -> (Resolver<FakeRemote>, ChatSession) {
        let resolver = Resolver::new(faq(), remote, window);
        let mut session = ChatSession::new(true);
        resolver.establish_health(&mut session).await;
        (resolver, session)
    }

    #[tokio::test]
    async fn test_every_faq_question_resolves_locally() {
        let (resolver, mut session) = online(FakeRemote::new(Behaviour::Answer), 6).await;

        for entry in faq().entries() {
            let asked = format!("  {}  ", entry.question.to_uppercase());
            let response = resolver.resolve(&mut session, &asked).await;
            assert_eq!(response.confidence, 95);
            assert!(response.text.contains(&entry.answer));
            assert_eq!(response.model.as_deref(), Some("Local Dataset"));
            assert_eq!(response.sources, vec!["MITK AI Assistant", "Local Dataset"]);
        }
        assert_eq!(resolver.remote.calls(), 0);
    }

    #[tokio::test]
    async fn test_remote_answer_is_formatted() {
        let (resolver, mut session) = online(FakeRemote::new(Behaviour::Answer), 6).await;
        assert_eq!(session.remote_status(), RemoteStatus::Online);

        let response = resolver.resolve(&mut session, "Tell me about courses").await;
        assert_eq!(response.text, "<p>MITK offers <strong>BE</strong> programs</p>");
        assert_eq!(response.confidence, 93);
        assert_eq!(response.sources, vec!["MITK AI Assistant", "Gemini"]);

        let requests = resolver.remote.requests.lock().unwrap();
        assert_eq!(requests[0].language.as_deref(), Some("en"));
        assert!(requests[0].history.is_empty());
    }

    #[tokio::test]
    async fn test_admission_with_remote_disabled() {
        let resolver = Resolver::new(faq(), FakeRemote::new(Behaviour::Answer), 6);
        let mut session = ChatSession::new(false);
        resolver.establish_health(&mut session).await;

        let response = resolver
            .resolve(&mut session, "What is the eligibility for admission?")
            .await;
        assert!(response.text.contains("Eligibility"));
        assert_eq!(response.confidence, 92);
        assert!(response
            .sources
            .iter()
            .any(|source| source == "Local Knowledge Base"));
        assert_eq!(resolver.remote.calls(), 0);
        assert_eq!(session.remote_status(), RemoteStatus::Disabled);
    }

    #[tokio::test]
    async fn test_timeout_falls_back_and_goes_offline() {
        let (resolver, mut session) = online(FakeRemote::new(Behaviour::Timeout), 6).await;

        let response = resolver.resolve(&mut session, "admission process").await;
        assert_eq!(response.confidence, 92);
        assert_eq!(session.remote_status(), RemoteStatus::Offline);

        resolver.resolve(&mut session, "placements").await;
        assert_eq!(resolver.remote.calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_probe_uses_fallback_only() {
        let (resolver, mut session) = online(FakeRemote::new(Behaviour::Refused), 6).await;
        assert_eq!(session.remote_status(), RemoteStatus::Offline);
        assert_eq!(session.remote_status().label(), "🔴 AI Offline");

        for message in ["admission", "hostel life", "hello"] {
            let response = resolver.resolve(&mut session, message).await;
            assert!(response.sources.contains(&"Local Knowledge Base".to_string()));
        }
        assert_eq!(resolver.remote.calls(), 0);
    }

    #[tokio::test]
    async fn test_history_sent_never_exceeds_window() {
        let (resolver, mut session) = online(FakeRemote::new(Behaviour::Answer), 4).await;

        for i in 0..6 {
            resolver
                .resolve(&mut session, &format!("question number {}", i))
                .await;
        }

        let requests = resolver.remote.requests.lock().unwrap();
        assert_eq!(requests.len(), 6);
        assert!(requests.iter().all(|request| request.history.len() <= 4));
        assert_eq!(requests[5].history.len(), 4);
        assert_eq!(
            requests[5].history[2].content.as_deref(),
            Some("question number 4")
        );
        assert_eq!(session.history.len(), 12);
    }
}
