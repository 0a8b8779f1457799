//! Client configuration
//!
//! [`ClientConfig`] bundles endpoint, credential and timeout. It is optional:
//! [`RequestClient::new`](crate::RequestClient::new) takes the endpoint and
//! key directly.

use crate::error::{ChatError, ChatResult};
use crate::logging::log_debug;
use std::time::Duration;

/// Default chat completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Fixed per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_VAR: &str = "OPENAI_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Raw or already `Bearer `-prefixed credential.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `OPENAI_API_KEY` and `OPENAI_ENDPOINT`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::RequestConstruction`] if the resulting
    /// configuration fails [`validate`](Self::validate).
    pub fn from_env() -> ChatResult<Self> {
        let mut config = Self::default();
        if let Ok(api_key) = std::env::var(API_KEY_VAR) {
            config.api_key = Some(api_key);
        }
        if let Ok(endpoint) = std::env::var(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }

        config.validate()?;

        log_debug!(
            endpoint = %config.endpoint,
            has_api_key = config.api_key.is_some(),
            timeout_secs = config.timeout.as_secs(),
            "Chat client configuration loaded from environment"
        );

        Ok(config)
    }

    /// Check that an endpoint and a key are present.
    pub fn validate(&self) -> ChatResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(ChatError::request_construction("endpoint is required"));
        }
        if self.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(ChatError::request_construction(format!(
                "API key is required (set {API_KEY_VAR})"
            )));
        }
        Ok(())
    }
}
