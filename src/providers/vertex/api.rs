//! Wire schema and HTTP calls for the Generative Language REST API (v1beta3).
//!
//! Endpoints are addressed as `models/{model}:{operation}` relative to the
//! configured base URL, authenticated by an API key query parameter.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::VertexConfig;
use crate::transport;
use crate::{Error, Result};

/// One turn of a conversation on the wire. `author` is the role string
/// (`user`/`assistant`) on requests and the model's author tag on responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexMessage {
    pub author: String,
    pub content: String,
    #[serde(
        rename = "citationMetadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub citation_metadata: Option<Value>,
}

/// Structured prompt: joined system context plus the ordered turn list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePrompt {
    pub context: String,
    pub messages: Vec<VertexMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMessageRequest {
    pub prompt: MessagePrompt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

/// `candidates` is absent when the backend's content filter suppressed all
/// output; that decodes as an empty list here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateMessageResponse {
    #[serde(default)]
    pub candidates: Vec<VertexMessage>,
}

#[derive(Debug, Serialize)]
struct EmbedTextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedTextResponse {
    embedding: Option<EmbeddingValue>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingValue {
    value: Vec<f32>,
}

#[derive(Debug, Serialize)]
struct BatchEmbedTextRequest<'a> {
    texts: &'a [String],
}

#[derive(Debug, Deserialize)]
struct BatchEmbedTextResponse {
    #[serde(default)]
    embeddings: Vec<EmbeddingValue>,
}

#[derive(Debug, Serialize)]
struct CountMessageTokensRequest<'a> {
    prompt: &'a MessagePrompt,
}

#[derive(Debug, Deserialize)]
struct CountMessageTokensResponse {
    #[serde(rename = "tokenCount")]
    token_count: usize,
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
}

/// Low-level client for the Generative Language REST API.
///
/// Holds the resolved credential and the chat/embedding model ids; cloning is
/// cheap, so one instance can back both the chat and the embedding adapter.
#[derive(Debug, Clone)]
pub struct VertexApi {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    chat_model: String,
    embedding_model: String,
}

impl VertexApi {
    pub fn new(config: &VertexConfig) -> Result<Self> {
        let mut base = config.base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url = Url::parse(&base).map_err(|e| {
            Error::Configuration(format!("invalid base url {:?}: {e}", config.base_url))
        })?;
        let api_key = config.resolve_api_key()?;

        Ok(Self {
            http: transport::build_http_client()?,
            base_url,
            api_key,
            chat_model: config.chat.model.clone(),
            embedding_model: config.embedding.model.clone(),
        })
    }

    pub fn chat_model(&self) -> &str {
        &self.chat_model
    }

    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    fn operation_url(&self, model: &str, operation: &str) -> Result<Url> {
        let path = format!("models/{model}:{operation}");
        self.base_url
            .join(&path)
            .map_err(|e| Error::Configuration(format!("invalid operation path {path:?}: {e}")))
    }

    /// One `generateMessage` call against the configured chat model.
    pub async fn generate_message(
        &self,
        request: &GenerateMessageRequest,
    ) -> Result<GenerateMessageResponse> {
        let url = self.operation_url(&self.chat_model, "generateMessage")?;
        debug!(model = %self.chat_model, "dispatching generateMessage request");
        let req = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(request);
        transport::execute_json(req, "generateMessage").await
    }

    /// Embed one text with the configured embedding model.
    pub async fn embed_text(&self, text: &str) -> Result<Vec<f32>> {
        let url = self.operation_url(&self.embedding_model, "embedText")?;
        let req = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&EmbedTextRequest { text });
        let response: EmbedTextResponse = transport::execute_json(req, "embedText").await?;
        response
            .embedding
            .map(|e| e.value)
            .ok_or_else(|| {
                Error::UnexpectedResponse("embedText response carried no embedding".to_string())
            })
    }

    /// Embed a batch of texts; the backend preserves input order.
    pub async fn batch_embed_text(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let url = self.operation_url(&self.embedding_model, "batchEmbedText")?;
        let req = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&BatchEmbedTextRequest { texts });
        let response: BatchEmbedTextResponse =
            transport::execute_json(req, "batchEmbedText").await?;
        Ok(response.embeddings.into_iter().map(|e| e.value).collect())
    }

    /// Token count the backend assigns to a structured prompt.
    pub async fn count_message_tokens(&self, prompt: &MessagePrompt) -> Result<usize> {
        let url = self.operation_url(&self.chat_model, "countMessageTokens")?;
        let req = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&CountMessageTokensRequest { prompt });
        let response: CountMessageTokensResponse =
            transport::execute_json(req, "countMessageTokens").await?;
        Ok(response.token_count)
    }

    /// Model names available under this API key, as returned (e.g.
    /// `models/chat-bison-001`).
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = self.base_url.join("models").map_err(|e| {
            Error::Configuration(format!("invalid base url {:?}: {e}", self.base_url))
        })?;
        let req = self.http.get(url).query(&[("key", self.api_key.as_str())]);
        let response: ListModelsResponse = transport::execute_json(req, "models").await?;
        Ok(response.models.into_iter().map(|m| m.name).collect())
    }
}
