//! Provider 适配层 — 将统一的 Prompt 抽象映射到各厂商的 HTTP API。
//!
//! Provider adapters implementing the [`ChatClient`](crate::client::ChatClient)
//! and [`EmbeddingClient`](crate::client::EmbeddingClient) contracts. Request
//! construction is a pure function in each adapter, so the wire mapping is
//! testable without a network; the HTTP round trip itself goes through
//! [`transport`](crate::transport).
//!
//! | Backend | Module | Operations |
//! |---------|--------|------------|
//! | Generative Language (PaLM-style) | [`vertex`] | chat, embeddings, token counting, model listing |
//! | text-generation-inference | [`huggingface`] | chat over raw joined text |

pub mod huggingface;
pub mod vertex;

pub use huggingface::HuggingFaceChatClient;
pub use vertex::{VertexApi, VertexChatClient, VertexEmbeddingClient};
