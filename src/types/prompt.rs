//! Ordered conversation container handed to provider clients.

use serde::{Deserialize, Serialize};

use crate::types::message::Message;

/// An ordered sequence of messages.
///
/// Order is conversation order and providers rely on it. The prompt is owned
/// by the caller until it is handed to a client; clients only borrow it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Prompt {
    messages: Vec<Message>,
}

impl Prompt {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// All message bodies joined with newlines, role tags dropped.
    ///
    /// Raw-text backends (single `inputs` field, no conversation structure)
    /// consume the prompt through this view.
    pub fn contents(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Message> for Prompt {
    fn from(message: Message) -> Self {
        Self {
            messages: vec![message],
        }
    }
}

impl From<Vec<Message>> for Prompt {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl From<&str> for Prompt {
    fn from(text: &str) -> Self {
        Message::user(text).into()
    }
}

impl From<String> for Prompt {
    fn from(text: String) -> Self {
        Message::user(text).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::message::MessageType;

    #[test]
    fn test_string_becomes_single_user_message() {
        let prompt = Prompt::from("hello");
        assert_eq!(prompt.len(), 1);
        assert_eq!(prompt.messages()[0].message_type, MessageType::User);
        assert_eq!(prompt.messages()[0].content, "hello");
    }

    #[test]
    fn test_message_order_is_preserved() {
        let prompt = Prompt::new(vec![
            Message::system("ctx"),
            Message::user("q"),
            Message::assistant("a"),
        ]);
        let roles: Vec<_> = prompt
            .messages()
            .iter()
            .map(|m| m.message_type)
            .collect();
        assert_eq!(
            roles,
            vec![MessageType::System, MessageType::User, MessageType::Assistant]
        );
    }

    #[test]
    fn test_contents_joins_bodies_with_newlines() {
        let prompt = Prompt::new(vec![Message::system("a"), Message::user("b")]);
        assert_eq!(prompt.contents(), "a\nb");
        assert_eq!(Prompt::default().contents(), "");
    }
}
