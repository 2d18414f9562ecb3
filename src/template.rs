//! 模板渲染模块：将带占位符的文本填充为具体的消息与提示词。
//!
//! Placeholder template rendering.
//!
//! A template is plain text containing `{name}` placeholders, where `name` is
//! an identifier (`[A-Za-z_][A-Za-z0-9_]*`). Anything else between braces
//! (JSON literals, expressions, stray whitespace) is not a placeholder and
//! passes through untouched, so templates may safely contain JSON payloads.
//!
//! Rendering is a pure function over the template text and the variable map:
//! no state is retained between calls, and substituted values are never
//! re-scanned for placeholders.
//!
//! ## Example
//!
//! ```rust
//! use genprompt::template::PromptTemplate;
//! use std::collections::HashMap;
//!
//! let template = PromptTemplate::new("Tell me a {adjective} joke about {topic}.");
//! let mut vars = HashMap::new();
//! vars.insert("adjective".to_string(), serde_json::json!("short"));
//! vars.insert("topic".to_string(), serde_json::json!("compilers"));
//!
//! let text = template.render_with(&vars).unwrap();
//! assert_eq!(text, "Tell me a short joke about compilers.");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::types::{Message, MessageType, Prompt};
use crate::Result;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex"));

/// Template usage errors. Both variants list every offending placeholder so
/// the caller can fix the template or the variable map in one pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A no-variable render was asked of a template that still contains
    /// placeholders.
    #[error("template contains unresolved placeholders: {0:?}")]
    UnresolvedPlaceholders(Vec<String>),
    /// The variable map lacks entries for placeholders present in the
    /// template.
    #[error("missing template variables: {0:?}")]
    MissingVariables(Vec<String>),
}

/// A reusable prompt template with a default message role.
///
/// The role determines what `create_message`/`create` produce: `new` templates
/// yield `user` messages, `system` templates yield `system` messages. The
/// template itself is immutable and safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    template: String,
    message_type: MessageType,
}

impl PromptTemplate {
    /// A template whose rendered messages carry the `user` role.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            message_type: MessageType::User,
        }
    }

    /// A template whose rendered messages carry the `system` role.
    pub fn system(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            message_type: MessageType::System,
        }
    }

    /// A template with an explicit default role.
    pub fn with_message_type(template: impl Into<String>, message_type: MessageType) -> Self {
        Self {
            template: template.into(),
            message_type,
        }
    }

    /// Load template text from a file. Once loaded, file-sourced and inline
    /// templates behave identically.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let template = std::fs::read_to_string(path)?;
        Ok(Self::new(template))
    }

    /// Same as [`from_file`](Self::from_file) with the `system` default role.
    pub fn system_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let template = std::fs::read_to_string(path)?;
        Ok(Self::system(template))
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Placeholder names in order of first appearance; duplicates collapse.
    pub fn variables(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for caps in PLACEHOLDER_RE.captures_iter(&self.template) {
            let name = &caps[1];
            if !seen.iter().any(|s: &String| s == name) {
                seen.push(name.to_string());
            }
        }
        seen
    }

    /// Render a template that must contain no placeholders.
    pub fn render(&self) -> Result<String> {
        let unresolved = self.variables();
        if !unresolved.is_empty() {
            return Err(TemplateError::UnresolvedPlaceholders(unresolved).into());
        }
        Ok(self.template.clone())
    }

    /// Render with a variable map. Every placeholder must have an entry;
    /// unused entries are ignored. Substitution is a single pass, so values
    /// containing brace syntax stay literal.
    pub fn render_with(&self, variables: &HashMap<String, Value>) -> Result<String> {
        let missing: Vec<String> = self
            .variables()
            .into_iter()
            .filter(|name| !variables.contains_key(name))
            .collect();
        if !missing.is_empty() {
            return Err(TemplateError::MissingVariables(missing).into());
        }
        let rendered = PLACEHOLDER_RE.replace_all(&self.template, |caps: &regex::Captures<'_>| {
            value_to_text(&variables[&caps[1]])
        });
        Ok(rendered.into_owned())
    }

    /// Render and wrap in a [`Message`] with the template's default role.
    pub fn create_message(&self) -> Result<Message> {
        Ok(Message::new(self.message_type, self.render()?))
    }

    pub fn create_message_with(&self, variables: &HashMap<String, Value>) -> Result<Message> {
        Ok(Message::new(self.message_type, self.render_with(variables)?))
    }

    /// Render and wrap in a single-message [`Prompt`].
    pub fn create(&self) -> Result<Prompt> {
        Ok(self.create_message()?.into())
    }

    pub fn create_with(&self, variables: &HashMap<String, Value>) -> Result<Prompt> {
        Ok(self.create_message_with(variables)?.into())
    }
}

/// Strings substitute verbatim; everything else uses its compact JSON form.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
