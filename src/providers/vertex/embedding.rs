//! Embedding adapter over `embedText` / `batchEmbedText`.

use async_trait::async_trait;

use crate::client::EmbeddingClient;
use crate::config::VertexConfig;
use crate::providers::vertex::api::VertexApi;
use crate::Result;

/// Embedding client for the configured embedding model.
#[derive(Debug, Clone)]
pub struct VertexEmbeddingClient {
    api: VertexApi,
}

impl VertexEmbeddingClient {
    pub fn new(api: VertexApi) -> Self {
        Self { api }
    }

    pub fn from_config(config: &VertexConfig) -> Result<Self> {
        Ok(Self {
            api: VertexApi::new(config)?,
        })
    }
}

#[async_trait]
impl EmbeddingClient for VertexEmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.api.embed_text(text).await
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.api.batch_embed_text(texts).await
    }
}
