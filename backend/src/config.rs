//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The Gemini API key is the only required value.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default Gemini REST endpoint (v1beta)
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Errors raised while loading configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// `GEMINI_API_KEY` is unset or blank
    #[error("GEMINI_API_KEY not found in environment variables")]
    MissingApiKey,

    /// A variable was set but could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Raw value that failed to parse
        value: String,
    },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Gemini client configuration
    pub gemini: GeminiConfig,
    /// Knowledge configuration (dataset, transcript window)
    pub knowledge: KnowledgeConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Gemini client configuration
#[derive(Clone)]
pub struct GeminiConfig {
    /// API credential, passed as the `key` query parameter
    pub api_key: String,
    /// Model name used in the `generateContent` path
    pub model: String,
    /// Base URL of the REST API
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
    /// Label reported to clients as the answering model
    pub model_label: String,
}

// Keep the key out of logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("model_label", &self.model_label)
            .finish()
    }
}

/// Knowledge configuration
#[derive(Debug, Clone)]
pub struct KnowledgeConfig {
    /// Path of the FAQ dataset (JSON array of question/answer records)
    pub faq_path: PathBuf,
    /// Number of trailing history entries kept in the transcript
    pub history_window: usize,
}

impl GeminiConfig {
    /// Configuration with defaults for everything except the key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-1.5-flash".to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            temperature: 0.7,
            max_output_tokens: 600,
            model_label: "Google Gemini Pro (Free)".to_string(),
        }
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            faq_path: PathBuf::from("dataset/mitk_faq.json"),
            history_window: 4,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut gemini = GeminiConfig::with_api_key(api_key);
        if let Some(model) = lookup("GEMINI_MODEL") {
            gemini.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_API_BASE_URL") {
            gemini.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "GEMINI_TIMEOUT_SECS")? {
            gemini.timeout = Duration::from_secs(secs);
        }
        if let Some(temperature) = parse_var(&lookup, "GEMINI_TEMPERATURE")? {
            gemini.temperature = temperature;
        }
        if let Some(tokens) = parse_var(&lookup, "GEMINI_MAX_OUTPUT_TOKENS")? {
            gemini.max_output_tokens = tokens;
        }
        if let Some(label) = lookup("MODEL_LABEL") {
            gemini.model_label = label;
        }

        let mut knowledge = KnowledgeConfig::default();
        if let Some(path) = lookup("FAQ_DATASET_PATH") {
            knowledge.faq_path = PathBuf::from(path);
        }
        if let Some(window) = parse_var(&lookup, "HISTORY_WINDOW")? {
            knowledge.history_window = window;
        }

        Ok(Self {
            server: ServerConfig {
                port: parse_var(&lookup, "PORT")?.unwrap_or(3000),
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            },
            gemini,
            knowledge,
        })
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
    }
}

/// First few characters of a secret followed by an ellipsis
pub fn redact(secret: &str) -> String {
    let preview: String = secret.chars().take(4).collect();
    format!("{}...", preview)
}
