//! Chat messages and the helpers that render them, and generation settings,
//! into snippet source text.

use crate::api::SnippetOptions;
use serde::{Deserialize, Serialize};

/// A single chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<MessageContent>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self::new("assistant", content)
    }

    pub fn system(content: impl Into<MessageContent>) -> Self {
        Self::new("system", content)
    }
}

/// Message body: plain text, or a list of typed parts for multimodal chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl From<&str> for MessageContent {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MessageContent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<ContentPart>> for MessageContent {
    fn from(value: Vec<ContentPart>) -> Self {
        Self::Parts(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Render `messages` as pretty JSON (four-space indentation, quoted keys).
///
/// Every line after the first is prefixed with `indent`, so the block can be
/// embedded at an arbitrary nesting depth.
pub fn stringify_messages(messages: &[ChatMessage], indent: &str) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

    let rendered = match messages.serialize(&mut ser) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize chat messages");
            String::from("[]")
        }
    };

    if indent.is_empty() {
        rendered
    } else {
        rendered.replace('\n', &format!("\n{}", indent))
    }
}

/// Ordered generation settings for chat snippets: `temperature` (if set),
/// `max_tokens` (always), `top_p` (if set).
pub fn generation_config(options: &SnippetOptions) -> Vec<(&'static str, String)> {
    let mut entries = Vec::with_capacity(3);
    if let Some(temperature) = options.temperature {
        entries.push(("temperature", temperature.to_string()));
    }
    entries.push(("max_tokens", options.max_tokens().to_string()));
    if let Some(top_p) = options.top_p {
        entries.push(("top_p", top_p.to_string()));
    }
    entries
}

/// Join `key{connector}value` pairs with `,{indent}`.
///
/// With `quote_keys` the keys are wrapped in double quotes, as needed for JSON
/// bodies; Python keyword arguments leave them bare.
pub fn stringify_generation_config(
    entries: &[(&str, String)],
    indent: &str,
    connector: &str,
    quote_keys: bool,
) -> String {
    let quote = if quote_keys { "\"" } else { "" };
    entries
        .iter()
        .map(|(key, value)| format!("{quote}{key}{quote}{connector}{value}"))
        .collect::<Vec<_>>()
        .join(&format!(",{}", indent))
}
