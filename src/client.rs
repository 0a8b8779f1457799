//! HTTP client for the chat completion endpoint
//!
//! Each [`RequestClient::send`] call is independent: it builds a request,
//! performs one POST, checks the status and decodes the body. Nothing is
//! retried and no state survives between calls.

use crate::auth;
use crate::config::{ClientConfig, DEFAULT_TIMEOUT};
use crate::error::{ChatError, ChatResult};
use crate::logging::log_debug;
use crate::payload::Payload;
use crate::types::ResponseRecord;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use std::time::{Duration, Instant};

/// Client bound to one endpoint and one credential
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use robert::{ModelType, Payload, RequestClient, Role};
///
/// # async fn example() -> robert::ChatResult<()> {
/// let client = RequestClient::new("https://api.openai.com/v1/chat/completions", "sk-...");
///
/// let mut payload = Payload::new(ModelType::Turbo, 0.7, 0.0)?;
/// payload.add_message(Role::User, "Hello!");
///
/// let record = client.send(&payload.serialize()?).await?;
/// println!("{:?}", record.first_content());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RequestClient {
    endpoint: String,
    key: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl std::fmt::Debug for RequestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestClient")
            .field("endpoint", &self.endpoint)
            .field("key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RequestClient {
    /// Create a client for `endpoint` authenticating with `key`.
    ///
    /// `key` may be a bare credential or already carry a `Bearer ` prefix;
    /// it is normalized when each request is built.
    pub fn new(endpoint: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            key: key.into(),
            timeout: DEFAULT_TIMEOUT,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from a validated [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::RequestConstruction`] if the configuration has no
    /// endpoint or no key.
    pub fn from_config(config: ClientConfig) -> ChatResult<Self> {
        config.validate()?;
        let ClientConfig {
            endpoint,
            api_key,
            timeout,
        } = config;
        Ok(Self::new(endpoint, api_key.unwrap_or_default()).with_timeout(timeout))
    }

    /// Create a client from `OPENAI_API_KEY` and `OPENAI_ENDPOINT`.
    pub fn from_env() -> ChatResult<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Serialize `payload` and send it.
    pub async fn send_payload(&self, payload: &Payload) -> ChatResult<ResponseRecord> {
        let body = payload.serialize()?;
        self.send(&body).await
    }

    /// POST an already serialized payload and decode the response.
    ///
    /// # Errors
    ///
    /// - [`ChatError::EmptyPayload`] if `payload` is empty; no request is made
    /// - [`ChatError::RequestConstruction`] if the endpoint or header is malformed
    /// - [`ChatError::InvalidToken`] if the key is too short to normalize
    /// - [`ChatError::Transport`] on connection, DNS, timeout or body read failure
    /// - [`ChatError::UnexpectedStatus`] on any status other than 200; the body
    ///   is not read
    /// - [`ChatError::Decode`] if the body is not a valid response record
    pub async fn send(&self, payload: &[u8]) -> ChatResult<ResponseRecord> {
        if payload.is_empty() {
            return Err(ChatError::empty_payload());
        }

        let request = self.build_request(payload)?;

        log_debug!(
            endpoint = %self.endpoint,
            payload_bytes = payload.len(),
            timeout_secs = self.timeout.as_secs(),
            "Sending chat completion request"
        );

        let start_time = Instant::now();
        let response = self
            .http
            .execute(request)
            .await
            .map_err(ChatError::transport)?;
        let status = response.status();

        log_debug!(
            status = status.as_u16(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Chat completion response received"
        );

        // Dropping the response here closes it without reading the body.
        if status != StatusCode::OK {
            return Err(ChatError::unexpected_status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(ChatError::transport)?;
        parse_response(&body)
    }

    fn build_request(&self, payload: &[u8]) -> ChatResult<reqwest::Request> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            ChatError::request_construction(format!("invalid endpoint {}: {e}", self.endpoint))
        })?;
        if !matches!(url.scheme(), "https" | "http") {
            return Err(ChatError::request_construction(format!(
                "unsupported endpoint scheme: {}",
                url.scheme()
            )));
        }

        let token = auth::normalize(&self.key)?;
        let mut authorization = HeaderValue::from_str(&token)
            .map_err(|e| ChatError::request_construction(format!("invalid API key format: {e}")))?;
        authorization.set_sensitive(true);

        self.http
            .post(url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .timeout(self.timeout)
            .body(payload.to_vec())
            .build()
            .map_err(|e| ChatError::request_construction(e.to_string()))
    }
}

fn parse_response(body: &[u8]) -> ChatResult<ResponseRecord> {
    let record: ResponseRecord = serde_json::from_slice(body).map_err(ChatError::decode)?;
    log_debug!(
        id = %record.id,
        model = %record.model,
        choices = record.choices.len(),
        total_tokens = record.usage.total_tokens,
        "Decoded chat completion response"
    );
    Ok(record)
}
