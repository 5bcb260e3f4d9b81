// Application state management
// Contains the configuration, FAQ dataset and Gemini client

use std::sync::Arc;

use crate::config::Config;
use crate::gemini::{GeminiClient, GeminiError};
use crate::knowledge::FaqStore;

/// State handle passed to axum handlers
pub type SharedState = Arc<AppState>;

/// Main server state
///
/// Built once at startup and never mutated, so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// FAQ dataset for exact-match answers
    pub faq: FaqStore,
    /// Gemini HTTP client
    pub gemini: GeminiClient,
}

impl AppState {
    /// Create state from configuration and an already loaded dataset
    ///
    /// # Errors
    /// * Returns `GeminiError::ClientBuild` if the HTTP client cannot be built.
    pub fn new(config: Config, faq: FaqStore) -> Result<Self, GeminiError> {
        let gemini = GeminiClient::new(&config.gemini)?;
        Ok(Self {
            config,
            faq,
            gemini,
        })
    }

    /// Load the dataset named in the configuration and build state
    ///
    /// # Errors
    /// * Returns `GeminiError::ClientBuild` if the HTTP client cannot be built.
    pub fn from_config(config: Config) -> Result<Self, GeminiError> {
        let faq = FaqStore::load_or_empty(&config.knowledge.faq_path);
        Self::new(config, faq)
    }

    /// Wrap in an `Arc` for the router
    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }

    /// Label reported for model answers
    pub fn model_label(&self) -> &str {
        &self.config.gemini.model_label
    }

    /// Number of trailing history entries used in the transcript
    pub fn history_window(&self) -> usize {
        self.config.knowledge.history_window
    }
}
