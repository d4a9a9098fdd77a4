//! Conversation message record.

use serde::{Deserialize, Serialize};

/// How a message's `content` should be read at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Plain text content.
    Text,
    /// JSON-encoded payload, expected to parse as a [`Product`].
    ///
    /// [`Product`]: crate::chat::Product
    Json,
}

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single entry in the conversation log.
///
/// Messages are immutable once created; the log they are appended to is
/// append-only and never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Content discriminant.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Raw text or a JSON-encoded payload, depending on `kind`.
    pub content: String,
    /// Message author.
    pub sender: Sender,
    /// Data URL of a locally attached image, user messages only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Message {
    /// Create a user message, optionally carrying an attached image preview.
    #[must_use]
    pub fn user(content: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            kind: MessageKind::Text,
            content: content.into(),
            sender: Sender::User,
            image_url,
        }
    }

    /// Create an assistant message with the given kind.
    #[must_use]
    pub fn assistant(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            sender: Sender::Assistant,
            image_url: None,
        }
    }

    /// Create a plain-text assistant message.
    #[must_use]
    pub fn assistant_text(content: impl Into<String>) -> Self {
        Self::assistant(MessageKind::Text, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = Message::user("hello", None);

        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.content, "hello");
        assert!(msg.image_url.is_none());
    }

    #[test]
    fn test_user_message_with_image() {
        let msg = Message::user("", Some("data:image/png;base64,AAAA".to_string()));

        assert_eq!(msg.image_url.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_assistant_text_message() {
        let msg = Message::assistant_text("hi there");

        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.sender, Sender::Assistant);
    }

    #[test]
    fn test_serde_shape() {
        let msg = Message::assistant(MessageKind::Json, "{}");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["type"], "json");
        assert_eq!(json["sender"], "assistant");
        assert!(json.get("image_url").is_none());
    }
}
