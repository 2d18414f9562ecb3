//! 类型系统模块：定义提示词与响应的核心数据类型。
//!
//! # Types Module
//!
//! This module defines the role-tagged conversation model shared by every
//! provider client: the vocabulary a caller uses to describe what to send,
//! and the uniform shape every backend's answer is mapped into.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Role-tagged unit of text plus provider metadata |
//! | [`MessageType`] | Closed role set (user, assistant, system, function) |
//! | [`Prompt`] | Ordered message sequence handed to a client |
//! | [`Generation`] | One candidate output with backend properties |
//! | [`AiResponse`] | Ordered candidate list returned by `generate` |
//!
//! ## Example
//!
//! ```rust
//! use genprompt::types::{AiResponse, Message, Prompt};
//!
//! let prompt = Prompt::new(vec![
//!     Message::system("You are a concise assistant"),
//!     Message::user("Name a prime number"),
//! ]);
//! assert_eq!(prompt.messages().len(), 2);
//!
//! let empty = AiResponse::default();
//! assert!(empty.generation().is_none());
//! ```

pub mod message;
pub mod prompt;
pub mod response;

pub use message::{Message, MessageType};
pub use prompt::Prompt;
pub use response::{AiResponse, Generation};
