// Client configuration
// Read once at startup from environment variables, with defaults for everything

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading client configuration
#[derive(Error, Debug, PartialEq)]
pub enum ClientConfigError {
    /// A variable was set but could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Raw value that failed to parse
        value: String,
    },
}

/// Chat client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the backend
    pub backend_url: String,
    /// Whether the remote path is used at all
    pub backend_enabled: bool,
    /// Timeout of one chat call
    pub chat_timeout: Duration,
    /// Timeout of the startup health probe
    pub health_timeout: Duration,
    /// Number of trailing history messages sent with each chat call
    pub history_window: usize,
    /// Local FAQ dataset for exact-match answers
    pub faq_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            backend_enabled: true,
            chat_timeout: Duration::from_millis(15_000),
            health_timeout: Duration::from_millis(5_000),
            history_window: 6,
            faq_path: PathBuf::from("dataset/mitk_faq.json"),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Result<Self, ClientConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("BACKEND_URL") {
            config.backend_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup("BACKEND_ENABLED") {
            config.backend_enabled = parse_flag(&raw).ok_or(ClientConfigError::InvalidValue {
                name: "BACKEND_ENABLED",
                value: raw,
            })?;
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "CHAT_TIMEOUT_MS")? {
            config.chat_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "HEALTH_TIMEOUT_MS")? {
            config.health_timeout = Duration::from_millis(ms);
        }
        if let Some(window) = parse_var(&lookup, "HISTORY_WINDOW")? {
            config.history_window = window;
        }
        if let Some(path) = lookup("FAQ_DATASET_PATH") {
            config.faq_path = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ClientConfigError>
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
            .map_err(|_| ClientConfigError::InvalidValue { name, value: raw }),
    }
}
