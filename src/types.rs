//! Decoded chat completion response

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Successful chat completion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Unique identifier of the completion.
    pub id: String,
    /// Object type, e.g. `chat.completion`.
    pub object: String,
    /// Creation time in Unix epoch seconds.
    pub created: i64,
    /// Model that produced the completion.
    pub model: String,
    pub usage: Usage,
    pub choices: Vec<Choice>,
}

impl ResponseRecord {
    /// Creation time as a UTC timestamp, `None` if out of range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }

    /// Content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// Token accounting for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// One candidate completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    pub finish_reason: String,
    pub index: u32,
}

/// Message carried by a [`Choice`]
///
/// The role is kept as a string so roles this crate cannot send still decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    pub content: String,
}
