//! Role-tagged message type, the unit of a [`Prompt`](crate::types::Prompt).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The role of a message within a conversation.
///
/// The set is closed: providers understand exactly these four roles, and an
/// unrecognized role string is a parse error rather than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Instructions that frame the conversation for the model.
    System,
    /// Content authored by the calling application or end user.
    User,
    /// Content previously produced by the model.
    Assistant,
    /// Output of a tool/function invocation. Wire mapping is
    /// backend-dependent; see the provider modules.
    Function,
}

impl MessageType {
    /// Canonical lowercase string for this role, as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::System => "system",
            MessageType::User => "user",
            MessageType::Assistant => "assistant",
            MessageType::Function => "function",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(MessageType::System),
            "user" => Ok(MessageType::User),
            "assistant" => Ok(MessageType::Assistant),
            "function" => Ok(MessageType::Function),
            other => Err(Error::UnknownMessageType(other.to_string())),
        }
    }
}

/// A single role-tagged unit of text plus provider metadata.
///
/// Messages are values: construct one and treat it as immutable. The
/// `properties` map carries provider metadata and stays empty unless a
/// provider or caller put something there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, serde_json::Value>,
}

impl Message {
    pub fn new(message_type: MessageType, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            message_type,
            properties: HashMap::new(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageType::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageType::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageType::Assistant, content)
    }

    pub fn function(content: impl Into<String>) -> Self {
        Self::new(MessageType::Function, content)
    }

    /// Construct a message carrying provider metadata.
    pub fn with_properties(
        message_type: MessageType,
        content: impl Into<String>,
        properties: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            content: content.into(),
            message_type,
            properties,
        }
    }
}
