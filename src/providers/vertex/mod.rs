//! Adapters for the Generative Language (PaLM-style) REST API.
//!
//! Split into a low-level API surface ([`VertexApi`], wire schema plus HTTP
//! calls) and the trait adapters built on it ([`VertexChatClient`],
//! [`VertexEmbeddingClient`]).

pub mod api;
pub mod chat;
pub mod embedding;

pub use api::{GenerateMessageRequest, GenerateMessageResponse, MessagePrompt, VertexApi, VertexMessage};
pub use chat::VertexChatClient;
pub use embedding::VertexEmbeddingClient;
