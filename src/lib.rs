//! # robert
//!
//! Minimal client for OpenAI-style chat completion APIs.
//!
//! ## Key Features
//!
//! - **Payload builder**: ordered conversation plus range-checked generation parameters
//! - **Token normalization**: any credential becomes a canonical `Bearer` header value
//! - **Typed responses**: the JSON body decodes into [`ResponseRecord`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use robert::{ModelType, Payload, RequestClient, Role};
//!
//! # async fn example() -> robert::ChatResult<()> {
//! let mut payload = Payload::new(ModelType::Turbo, 0.5, 0.0)?;
//! payload.add_message(Role::System, "You are a helpful assistant.");
//! payload.add_message(Role::User, "Hello, how are you?");
//!
//! let client = RequestClient::from_env()?;
//! let record = client.send(&payload.serialize()?).await?;
//! println!("{} tokens used", record.usage.total_tokens);
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod types;

#[cfg(test)]
mod tests;

pub use auth::normalize;
pub use client::RequestClient;
pub use config::ClientConfig;
pub use error::{ChatError, ChatResult};
pub use payload::{ChatMessage, ModelType, Payload, Role};
pub use types::{Choice, ResponseMessage, ResponseRecord, Usage};
