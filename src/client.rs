//! Unified client interface implemented by every provider adapter.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! One trait for chat generation, one for embeddings; concrete backends live
//! under `src/providers/`.

use async_trait::async_trait;

use crate::types::{AiResponse, Prompt};
use crate::Result;

/// Uniform `Prompt -> AiResponse` surface over a generative backend.
///
/// Implementations perform exactly one HTTP round trip per call and hold only
/// immutable configuration, so a client can be shared freely across tasks.
/// Backend selection is plain construction; `Box<dyn ChatClient>` works when
/// the backend is chosen at runtime.
#[async_trait]
pub trait ChatClient: Send + Sync + std::fmt::Debug {
    /// Generate candidate completions for a prompt.
    async fn generate(&self, prompt: &Prompt) -> Result<AiResponse>;

    /// Convenience for single-string use: wraps `text` as a user prompt and
    /// returns the first candidate's text, or an empty string when the
    /// backend produced no candidates.
    async fn generate_text(&self, text: &str) -> Result<String> {
        let prompt = Prompt::from(text);
        let response = self.generate(&prompt).await?;
        Ok(response
            .generation()
            .map(|g| g.text.clone())
            .unwrap_or_default())
    }
}

/// Text embedding surface over a backend's embedding endpoint.
#[async_trait]
pub trait EmbeddingClient: Send + Sync + std::fmt::Debug {
    /// Embed one text into a dense vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of texts; the output order matches the input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Generation;

    #[derive(Debug)]
    struct Canned(Vec<Generation>);

    #[async_trait]
    impl ChatClient for Canned {
        async fn generate(&self, _prompt: &Prompt) -> Result<AiResponse> {
            Ok(AiResponse::new(self.0.clone()))
        }
    }

    #[tokio::test]
    async fn test_generate_text_returns_first_candidate() {
        let client = Canned(vec![Generation::new("first"), Generation::new("second")]);
        assert_eq!(client.generate_text("q").await.unwrap(), "first");
    }

    #[tokio::test]
    async fn test_generate_text_handles_empty_response() {
        let client = Canned(Vec::new());
        assert_eq!(client.generate_text("q").await.unwrap(), "");
    }
}
