//! Adapter for a dedicated text-generation-inference endpoint.
//!
//! The endpoint takes raw text, not a structured conversation, so the prompt
//! is flattened with [`Prompt::contents`] and every role is included. One
//! `POST {url}/generate` per call, bearer-authenticated.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

use crate::client::ChatClient;
use crate::config::HuggingFaceConfig;
use crate::transport;
use crate::types::{AiResponse, Generation, Prompt};
use crate::{Error, Result};

/// Body of the `/generate` call.
#[derive(Debug, Clone, Serialize)]
struct GenerateRequest {
    inputs: String,
    parameters: GenerateParameters,
}

#[derive(Debug, Clone, Serialize)]
struct GenerateParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    max_new_tokens: u32,
    /// Always requested so token usage lands in the generation properties.
    details: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generated_text: String,
    details: Option<GenerateDetails>,
}

#[derive(Debug, Deserialize)]
struct GenerateDetails {
    generated_tokens: Option<u64>,
    finish_reason: Option<String>,
}

fn build_generate_request(prompt: &Prompt, config: &HuggingFaceConfig) -> GenerateRequest {
    GenerateRequest {
        inputs: prompt.contents(),
        parameters: GenerateParameters {
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
            max_new_tokens: config.max_new_tokens,
            details: true,
        },
    }
}

fn response_to_generation(response: GenerateResponse) -> Generation {
    let mut properties = HashMap::new();
    if let Some(details) = response.details {
        if let Some(tokens) = details.generated_tokens {
            properties.insert("generated_tokens".to_string(), Value::from(tokens));
        }
        if let Some(reason) = details.finish_reason {
            properties.insert("finish_reason".to_string(), Value::from(reason));
        }
    }
    Generation::with_properties(response.generated_text, properties)
}

/// Chat client backed by one text-generation-inference deployment.
#[derive(Debug, Clone)]
pub struct HuggingFaceChatClient {
    http: reqwest::Client,
    generate_url: Url,
    api_key: String,
    config: HuggingFaceConfig,
}

impl HuggingFaceChatClient {
    /// Build a client from configuration. Fails when the endpoint URL is
    /// missing or unparseable, or when no API key can be resolved.
    pub fn from_config(config: HuggingFaceConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(Error::Configuration(
                "inference endpoint url is not set".to_string(),
            ));
        }
        let mut base = config.url.trim_end_matches('/').to_string();
        base.push('/');
        let base = Url::parse(&base)
            .map_err(|e| Error::Configuration(format!("invalid endpoint url {:?}: {e}", config.url)))?;
        let generate_url = base
            .join("generate")
            .map_err(|e| Error::Configuration(format!("invalid endpoint url {:?}: {e}", config.url)))?;
        let api_key = config.resolve_api_key()?;

        Ok(Self {
            http: transport::build_http_client()?,
            generate_url,
            api_key,
            config,
        })
    }

    /// Shorthand for an explicit endpoint plus key, other settings default.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(HuggingFaceConfig {
            url: url.into(),
            api_key: api_key.into(),
            ..HuggingFaceConfig::default()
        })
    }

    pub fn config(&self) -> &HuggingFaceConfig {
        &self.config
    }
}

#[async_trait]
impl ChatClient for HuggingFaceChatClient {
    async fn generate(&self, prompt: &Prompt) -> Result<AiResponse> {
        let body = build_generate_request(prompt, &self.config);
        debug!(endpoint = %self.generate_url, "dispatching text generation request");

        let request = self
            .http
            .post(self.generate_url.clone())
            .bearer_auth(&self.api_key)
            .json(&body);
        let response: GenerateResponse = transport::execute_json(request, "generate").await?;

        Ok(AiResponse::new(vec![response_to_generation(response)]))
    }
}
