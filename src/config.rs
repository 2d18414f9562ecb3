//! 配置模块：提供各后端的连接与采样参数，支持 YAML 文件与环境变量。
//!
//! Provider configuration: connection settings plus the sampling knobs each
//! backend accepts. Values come from code or a YAML file; an empty `api_key`
//! falls back to the provider's `{PROVIDER}_API_KEY` environment variable at
//! resolution time. Sampling parameters are opaque pass-through values; this
//! module never interprets them.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::{Error, Result};

/// Credential fallback for the cloud chat/embedding backend.
pub const VERTEX_API_KEY_ENV: &str = "VERTEX_API_KEY";
/// Credential fallback for the managed inference endpoint.
pub const HUGGINGFACE_API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

pub const DEFAULT_VERTEX_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta3";
pub const DEFAULT_VERTEX_CHAT_MODEL: &str = "chat-bison-001";
pub const DEFAULT_VERTEX_EMBEDDING_MODEL: &str = "embedding-gecko-001";

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&raw)
        .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))
}

fn resolve_key(configured: &str, env_var: &str) -> Result<String> {
    if !configured.is_empty() {
        return Ok(configured.to_string());
    }
    env::var(env_var).map_err(|_| {
        Error::Configuration(format!(
            "no API key configured and {env_var} is not set"
        ))
    })
}

/// Connection and model settings for the cloud chat/embedding backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexConfig {
    pub base_url: String,
    /// Empty means "resolve from `VERTEX_API_KEY` at client construction".
    pub api_key: String,
    pub chat: VertexChatOptions,
    pub embedding: VertexEmbeddingOptions,
}

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VERTEX_BASE_URL.to_string(),
            api_key: String::new(),
            chat: VertexChatOptions::default(),
            embedding: VertexEmbeddingOptions::default(),
        }
    }
}

impl VertexConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        read_yaml(path.as_ref())
    }

    pub fn resolve_api_key(&self) -> Result<String> {
        resolve_key(&self.api_key, VERTEX_API_KEY_ENV)
    }
}

/// Sampling knobs for the conversational endpoint. `None` fields are omitted
/// from the request and the backend applies its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexChatOptions {
    pub model: String,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
    pub candidate_count: Option<u32>,
}

impl Default for VertexChatOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_VERTEX_CHAT_MODEL.to_string(),
            temperature: Some(0.7),
            top_p: None,
            top_k: None,
            candidate_count: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexEmbeddingOptions {
    pub model: String,
}

impl Default for VertexEmbeddingOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_VERTEX_EMBEDDING_MODEL.to_string(),
        }
    }
}

/// Settings for a dedicated text-generation inference endpoint.
///
/// `url` is the full endpoint base (deployment-specific, so no default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuggingFaceConfig {
    pub url: String,
    /// Empty means "resolve from `HUGGINGFACE_API_KEY` at client construction".
    pub api_key: String,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
    pub max_new_tokens: u32,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            temperature: None,
            top_p: None,
            top_k: None,
            max_new_tokens: 1000,
        }
    }
}

impl HuggingFaceConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        read_yaml(path.as_ref())
    }

    pub fn resolve_api_key(&self) -> Result<String> {
        resolve_key(&self.api_key, HUGGINGFACE_API_KEY_ENV)
    }
}
