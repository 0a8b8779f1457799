//! Chat completion request payload
//!
//! [`Payload`] accumulates the conversation and generation parameters and
//! encodes them into the request body.

use crate::error::{ChatError, ChatResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric role codes: 0 = system, 1 = user, 2 = assistant.
impl TryFrom<i32> for Role {
    type Error = ChatError;

    fn try_from(index: i32) -> ChatResult<Self> {
        match index {
            0 => Ok(Role::System),
            1 => Ok(Role::User),
            2 => Ok(Role::Assistant),
            other => Err(ChatError::invalid_parameter(
                "role",
                format!("invalid role {other}"),
            )),
        }
    }
}

/// Models selectable through the typed setter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelType {
    #[default]
    Basic,
    Turbo,
    Basic16K,
    Turbo16K,
}

/// Literal model name for each [`ModelType`], indexed by discriminant.
const MODEL_NAMES: [(ModelType, &str); 4] = [
    (ModelType::Basic, "gpt-3.5-turbo-0301"),
    (ModelType::Turbo, "gpt-3.5-turbo"),
    (ModelType::Basic16K, "gpt-3.5-turbo-16k-0613"),
    (ModelType::Turbo16K, "gpt-3.5-turbo-16k"),
];

impl ModelType {
    /// Literal model name sent on the wire.
    pub fn model_name(&self) -> &'static str {
        MODEL_NAMES[*self as usize].1
    }

    /// Resolve a numeric model code.
    ///
    /// Codes outside the table resolve to [`ModelType::Basic`] instead of
    /// failing.
    pub fn from_index(index: i32) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| MODEL_NAMES.get(i))
            .map_or(ModelType::Basic, |(model, _)| *model)
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.model_name())
    }
}

/// One turn of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Request body for the chat completion endpoint
///
/// Messages are sent in the order they were appended.
///
/// # Example
///
/// ```rust
/// use robert::{ModelType, Payload, Role};
///
/// let mut payload = Payload::new(ModelType::Turbo, 0.2, 0.0)?;
/// payload.add_message(Role::System, "You are terse.");
/// payload.add_message(Role::User, "Name a prime.");
/// let body = payload.serialize()?;
/// assert!(!body.is_empty());
/// # Ok::<(), robert::ChatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload {
    #[serde(rename = "messages")]
    chat_messages: Vec<ChatMessage>,
    model: String,
    temperature: f32,
    presence_penalty: f32,
}

/// Defaults: basic model, temperature 0.5, no presence penalty.
impl Default for Payload {
    fn default() -> Self {
        Self {
            chat_messages: Vec::new(),
            model: ModelType::Basic.model_name().to_string(),
            temperature: 0.5,
            presence_penalty: 0.0,
        }
    }
}

impl Payload {
    /// Lower bound for temperature and presence penalty.
    pub const MIN_PARAM: f32 = -1.0;
    /// Upper bound for temperature and presence penalty.
    pub const MAX_PARAM: f32 = 1.0;

    /// Create an empty payload with validated generation parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::InvalidParameter`] if either value is outside
    /// `[-1.0, 1.0]`.
    pub fn new(model: ModelType, temperature: f32, presence_penalty: f32) -> ChatResult<Self> {
        let mut payload = Self::default();
        payload.set_model(model);
        payload.set_temperature(temperature)?;
        payload.set_presence_penalty(presence_penalty)?;
        Ok(payload)
    }

    pub fn add_message(&mut self, role: Role, content: impl Into<String>) {
        self.chat_messages.push(ChatMessage::new(role, content));
    }

    /// Append one message per element of `contents`, all with the same role.
    pub fn add_messages<I, S>(&mut self, role: Role, contents: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for content in contents {
            self.add_message(role, content);
        }
    }

    /// Like [`add_messages`](Self::add_messages) with a numeric role code.
    ///
    /// The code is checked before anything is appended.
    pub fn add_messages_by_index<I, S>(&mut self, role: i32, contents: I) -> ChatResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let role = Role::try_from(role)?;
        self.add_messages(role, contents);
        Ok(())
    }

    pub fn set_model(&mut self, model: ModelType) {
        self.model = model.model_name().to_string();
    }

    /// Set the model from a numeric code; unknown codes select the basic model.
    pub fn set_model_index(&mut self, index: i32) {
        self.set_model(ModelType::from_index(index));
    }

    /// # Errors
    ///
    /// Returns [`ChatError::InvalidParameter`] and keeps the previous value
    /// if `temperature` is outside `[-1.0, 1.0]`.
    pub fn set_temperature(&mut self, temperature: f32) -> ChatResult<()> {
        self.temperature = check_range("temperature", temperature)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ChatError::InvalidParameter`] and keeps the previous value
    /// if `penalty` is outside `[-1.0, 1.0]`.
    pub fn set_presence_penalty(&mut self, penalty: f32) -> ChatResult<()> {
        self.presence_penalty = check_range("presence penalty", penalty)?;
        Ok(())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.chat_messages
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn presence_penalty(&self) -> f32 {
        self.presence_penalty
    }

    /// Encode the payload as a JSON request body.
    pub fn serialize(&self) -> ChatResult<Vec<u8>> {
        let body = serde_json::to_vec(self).map_err(ChatError::serialization)?;
        log_debug!(
            model = %self.model,
            message_count = self.chat_messages.len(),
            payload_bytes = body.len(),
            "Serialized chat payload"
        );
        Ok(body)
    }
}

fn check_range(parameter: &'static str, value: f32) -> ChatResult<f32> {
    if (Payload::MIN_PARAM..=Payload::MAX_PARAM).contains(&value) {
        Ok(value)
    } else {
        Err(ChatError::invalid_parameter(
            parameter,
            format!("{value} must be between -1.0 and 1.0"),
        ))
    }
}
