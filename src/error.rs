//! Error types for chat completion operations.
//!
//! Every failure the crate can produce is a variant of [`ChatError`]. The
//! constructor methods log the failure once at creation, so callers can
//! propagate with `?` without logging again.
//!
//! # Example
//!
//! ```rust
//! use robert::{ChatError, ChatResult, error::ErrorCategory};
//!
//! fn describe(result: ChatResult<()>) -> &'static str {
//!     match result {
//!         Ok(()) => "ok",
//!         Err(err) if err.category() == ErrorCategory::Client => "fix the request",
//!         Err(err) if err.is_retryable() => "try again later",
//!         Err(_) => "unexpected failure",
//!     }
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied something invalid (token, parameter, endpoint).
    Client,

    /// The network or the remote API misbehaved.
    External,

    /// The encoder failed on data the crate produced itself.
    Internal,
}

/// Convenient result type for chat operations.
pub type ChatResult<T> = std::result::Result<T, ChatError>;

/// Errors that can occur while building, sending or decoding a chat request.
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `InvalidToken` | Client | No |
/// | `InvalidParameter` | Client | No |
/// | `EmptyPayload` | Client | No |
/// | `RequestConstruction` | Client | No |
/// | `Transport` | External | Yes |
/// | `UnexpectedStatus` | External | 429 and 5xx only |
/// | `Decode` | External | No |
/// | `Serialization` | Internal | No |
#[derive(Error, Debug)]
pub enum ChatError {
    /// The credential is too short to be a usable token.
    #[error("token length {length}, expected at least {min}")]
    InvalidToken {
        /// Byte length of the rejected credential.
        length: usize,
        /// Minimum accepted byte length.
        min: usize,
    },

    /// A builder argument was outside its accepted domain.
    #[error("invalid {parameter}: {message}")]
    InvalidParameter {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// `send` was called with no payload bytes.
    #[error("payload is empty")]
    EmptyPayload,

    /// The HTTP request could not be assembled.
    #[error("failed to create request: {message}")]
    RequestConstruction {
        /// What was malformed.
        message: String,
    },

    /// The request never produced a response (connect, DNS, timeout, body read).
    #[error("failed to send request: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
        /// Whether the fixed request timeout elapsed.
        timed_out: bool,
        /// The underlying error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The API answered with something other than 200 OK.
    #[error("API request failed with status code: {code}")]
    UnexpectedStatus {
        /// HTTP status code returned by the API.
        code: u16,
    },

    /// The 200 body was not a well-formed response record.
    #[error("failed to parse response: {source}")]
    Decode {
        /// The JSON decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The payload could not be encoded.
    #[error("failed to create payload: {source}")]
    Serialization {
        /// The JSON encoder error.
        #[source]
        source: serde_json::Error,
    },
}

impl ChatError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidToken { .. }
            | Self::InvalidParameter { .. }
            | Self::EmptyPayload
            | Self::RequestConstruction { .. } => ErrorCategory::Client,
            Self::Transport { .. } | Self::UnexpectedStatus { .. } | Self::Decode { .. } => {
                ErrorCategory::External
            }
            Self::Serialization { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether sending the same request again might succeed.
    ///
    /// This is a hint only; the crate itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::UnexpectedStatus { code } => *code == 429 || (500..600).contains(code),
            _ => false,
        }
    }

    /// HTTP status code, if the API responded with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { code } => Some(*code),
            _ => None,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn invalid_token(length: usize, min: usize) -> Self {
        log_warn!(
            error_type = "invalid_token",
            length = length,
            min = min,
            "Credential too short to normalize"
        );
        Self::InvalidToken { length, min }
    }

    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "invalid_parameter",
            parameter = parameter,
            message = %message,
            "Payload parameter rejected"
        );
        Self::InvalidParameter { parameter, message }
    }

    pub fn empty_payload() -> Self {
        log_warn!(error_type = "empty_payload", "Refusing to send empty payload");
        Self::EmptyPayload
    }

    pub fn request_construction(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_construction",
            message = %message,
            "Chat request could not be built"
        );
        Self::RequestConstruction { message }
    }

    pub fn transport(err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        let message = err.to_string();
        log_error!(
            error_type = "transport",
            timed_out = timed_out,
            message = %message,
            "Chat request transport failed"
        );
        Self::Transport {
            message,
            timed_out,
            source: Some(Box::new(err)),
        }
    }

    pub fn unexpected_status(code: u16) -> Self {
        log_error!(
            error_type = "unexpected_status",
            status = code,
            "Chat API returned non-OK status"
        );
        Self::UnexpectedStatus { code }
    }

    pub fn decode(source: serde_json::Error) -> Self {
        log_warn!(
            error_type = "decode",
            line = source.line(),
            column = source.column(),
            message = %source,
            "Chat API response body invalid"
        );
        Self::Decode { source }
    }

    pub fn serialization(source: serde_json::Error) -> Self {
        log_error!(
            error_type = "serialization",
            message = %source,
            "Payload serialization failed"
        );
        Self::Serialization { source }
    }
}
