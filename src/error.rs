use thiserror::Error;

use crate::template::TemplateError;

/// Unified error type for the crate.
/// Aggregates module-local errors into high-level categories the caller can
/// match on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("Unknown message type: {0:?}")]
    UnknownMessageType(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote error: HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Non-2xx response with the raw body text preserved for diagnostics.
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Error::Remote {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_prompt(message: impl Into<String>) -> Self {
        Error::InvalidPrompt(message.into())
    }

    /// HTTP status of a remote failure, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

// Re-export for convenience
pub use crate::template::TemplateError as Template;
