//! # genprompt
//!
//! 统一的生成式 AI 提示词抽象：消息模型、模板渲染与多后端 HTTP 客户端。
//!
//! A thin integration layer that adapts generative-AI HTTP APIs to one
//! in-process abstraction: build a [`Prompt`] from role-tagged [`Message`]s,
//! hand it to any [`ChatClient`], and get back a uniform [`AiResponse`].
//!
//! ## Overview
//!
//! The reusable core is the prompt model and the placeholder template
//! renderer. Provider clients are deliberately thin: each one turns a
//! `Prompt` plus immutable configuration into a single provider-specific
//! HTTP request and maps the JSON response back into `AiResponse`. There is
//! no retry or fallback logic in this layer, and no streaming.
//!
//! - **Uniform surface**: one [`ChatClient`] trait across backends, plus
//!   [`EmbeddingClient`] where a backend offers embeddings
//! - **Pure request mapping**: wire construction is side-effect free and
//!   tested without a network
//! - **Typed errors**: invalid prompts are rejected before any I/O; remote
//!   failures keep their HTTP status and body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genprompt::config::VertexConfig;
//! use genprompt::providers::VertexChatClient;
//! use genprompt::{ChatClient, Message, Prompt};
//!
//! #[tokio::main]
//! async fn main() -> genprompt::Result<()> {
//!     let config = VertexConfig::default(); // api key from VERTEX_API_KEY
//!     let client = VertexChatClient::from_config(&config)?;
//!
//!     let prompt = Prompt::new(vec![
//!         Message::system("You are a concise assistant."),
//!         Message::user("Name a prime number."),
//!     ]);
//!
//!     let response = client.generate(&prompt).await?;
//!     if let Some(generation) = response.generation() {
//!         println!("{}", generation.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Core type definitions (messages, prompts, responses) |
//! | [`template`] | Placeholder template rendering |
//! | [`client`] | Client traits implemented by every backend |
//! | [`providers`] | Concrete backend adapters |
//! | [`config`] | Provider configuration, YAML and env loading |
//! | [`transport`] | Shared HTTP client construction and dispatch |

pub mod client;
pub mod config;
pub mod providers;
pub mod template;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ChatClient, EmbeddingClient};
pub use template::{PromptTemplate, TemplateError};
pub use types::{
    message::{Message, MessageType},
    prompt::Prompt,
    response::{AiResponse, Generation},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
