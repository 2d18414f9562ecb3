//! Uniform response shape produced by every provider client.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One candidate output for a prompt.
///
/// `properties` carries whatever metadata the backend reported for this
/// candidate (token counts, citation data and the like). Keys are the
/// backend's own field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub text: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, serde_json::Value>,
}

impl Generation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_properties(
        text: impl Into<String>,
        properties: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            text: text.into(),
            properties,
        }
    }
}

/// Ordered candidate list, the terminal artifact of a `generate` call.
///
/// Most callers want one answer; `generation()` returns the first candidate
/// when the backend produced any. Backends may legitimately return zero
/// candidates (content filtering), so the response can be empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AiResponse {
    generations: Vec<Generation>,
}

impl AiResponse {
    pub fn new(generations: Vec<Generation>) -> Self {
        Self { generations }
    }

    /// The first candidate, if the backend returned any.
    pub fn generation(&self) -> Option<&Generation> {
        self.generations.first()
    }

    pub fn generations(&self) -> &[Generation] {
        &self.generations
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }
}

impl From<Vec<Generation>> for AiResponse {
    fn from(generations: Vec<Generation>) -> Self {
        Self { generations }
    }
}
