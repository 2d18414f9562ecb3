//! Conversational adapter over `generateMessage`.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use crate::client::ChatClient;
use crate::config::{VertexChatOptions, VertexConfig};
use crate::providers::vertex::api::{
    GenerateMessageRequest, MessagePrompt, VertexApi, VertexMessage,
};
use crate::types::{AiResponse, Generation, MessageType, Prompt};
use crate::{Error, Result};

/// Map a prompt onto the structured wire form.
///
/// System messages join into the `context` field; user and assistant
/// messages become the ordered turn list. Function messages have no
/// documented mapping on this backend and are dropped. A prompt that leaves
/// the turn list empty is rejected here, before any network I/O.
fn build_generate_request(
    prompt: &Prompt,
    options: &VertexChatOptions,
) -> Result<GenerateMessageRequest> {
    let context = prompt
        .messages()
        .iter()
        .filter(|m| m.message_type == MessageType::System)
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let messages: Vec<VertexMessage> = prompt
        .messages()
        .iter()
        .filter(|m| {
            matches!(
                m.message_type,
                MessageType::User | MessageType::Assistant
            )
        })
        .map(|m| VertexMessage {
            author: m.message_type.as_str().to_string(),
            content: m.content.clone(),
            citation_metadata: None,
        })
        .collect();

    if messages.is_empty() {
        return Err(Error::invalid_prompt(
            "no user or assistant messages found in the prompt",
        ));
    }

    Ok(GenerateMessageRequest {
        prompt: MessagePrompt { context, messages },
        temperature: options.temperature,
        candidate_count: options.candidate_count,
        top_p: options.top_p,
        top_k: options.top_k,
    })
}

fn candidate_to_generation(candidate: VertexMessage) -> Generation {
    let mut properties = HashMap::new();
    properties.insert("author".to_string(), Value::from(candidate.author));
    if let Some(citation) = candidate.citation_metadata {
        properties.insert("citationMetadata".to_string(), citation);
    }
    Generation::with_properties(candidate.content, properties)
}

/// Chat client for the conversational endpoint.
#[derive(Debug, Clone)]
pub struct VertexChatClient {
    api: VertexApi,
    options: VertexChatOptions,
}

impl VertexChatClient {
    pub fn new(api: VertexApi, options: VertexChatOptions) -> Self {
        Self { api, options }
    }

    pub fn from_config(config: &VertexConfig) -> Result<Self> {
        Ok(Self {
            api: VertexApi::new(config)?,
            options: config.chat.clone(),
        })
    }

    pub fn options(&self) -> &VertexChatOptions {
        &self.options
    }
}

#[async_trait]
impl ChatClient for VertexChatClient {
    async fn generate(&self, prompt: &Prompt) -> Result<AiResponse> {
        let request = build_generate_request(prompt, &self.options)?;
        let response = self.api.generate_message(&request).await?;
        let generations = response
            .candidates
            .into_iter()
            .map(candidate_to_generation)
            .collect();
        Ok(AiResponse::new(generations))
    }
}
