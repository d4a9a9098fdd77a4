//! Interpretation of the backend's reply string.
//!
//! The `/chat` endpoint returns a single opaque string that may itself be a
//! JSON envelope, a bare product object, or plain text. Rather than probing
//! fields ad hoc at every call site, the policy lives here as one parse into
//! a closed set of variants, attempted in order with first match winning:
//!
//! 1. Not valid JSON: the raw string is plain text.
//! 2. `{"type": "json", "content": ...}`: a JSON envelope; the content is
//!    re-serialized to a string when it is not one already.
//! 3. A bare product object (`name`, `description`, `brand`, `category`,
//!    `price`): serialized back to a string wholesale.
//! 4. `{"type": "text", "content": "..."}`: a text envelope; the nested
//!    content is taken verbatim.
//! 5. Anything else: the entire raw string as plain text.

use serde_json::Value;

use super::message::{Message, MessageKind};

/// The backend's reply string, resolved to one of the known shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReply {
    /// `{"type": "json", "content": ...}` envelope; content is a JSON string.
    JsonEnvelope { content: String },
    /// A bare product object, serialized back to a string.
    Product { content: String },
    /// `{"type": "text", "content": "..."}` envelope.
    TextEnvelope { content: String },
    /// Everything else: the raw reply, displayed as-is.
    Plain { content: String },
}

impl ParsedReply {
    /// Resolve a raw reply string against the interpretation policy.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            return Self::Plain {
                content: raw.to_string(),
            };
        };

        if type_tag(&value) == Some("json") {
            if let Some(content) = envelope_content(&value) {
                return Self::JsonEnvelope { content };
            }
        }

        if looks_like_product(&value) {
            return Self::Product {
                content: value.to_string(),
            };
        }

        if type_tag(&value) == Some("text") {
            if let Some(content) = value.get("content").and_then(Value::as_str) {
                if !content.is_empty() {
                    return Self::TextEnvelope {
                        content: content.to_string(),
                    };
                }
            }
        }

        Self::Plain {
            content: raw.to_string(),
        }
    }

    /// Convert the parsed reply into an assistant message.
    #[must_use]
    pub fn into_message(self) -> Message {
        match self {
            Self::JsonEnvelope { content } | Self::Product { content } => {
                Message::assistant(MessageKind::Json, content)
            }
            Self::TextEnvelope { content } | Self::Plain { content } => {
                Message::assistant(MessageKind::Text, content)
            }
        }
    }
}

fn type_tag(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

/// Extract an envelope's content, re-serializing non-string payloads.
///
/// Absent, null, and empty-string contents all disqualify the envelope.
fn envelope_content(value: &Value) -> Option<String> {
    match value.get("content")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// A reply is a bare product when the four descriptive fields are present as
/// non-empty strings and a price is defined.
fn looks_like_product(value: &Value) -> bool {
    let has_field = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    };

    has_field("name")
        && has_field("description")
        && has_field("brand")
        && has_field("category")
        && value.get("price").is_some_and(|p| !p.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;

    #[test]
    fn test_unparseable_reply_is_plain_text() {
        let reply = ParsedReply::parse("plain unparseable text");
        assert_eq!(
            reply,
            ParsedReply::Plain {
                content: "plain unparseable text".to_string()
            }
        );

        let msg = reply.into_message();
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.sender, Sender::Assistant);
        assert_eq!(msg.content, "plain unparseable text");
    }

    #[test]
    fn test_json_envelope_with_string_content() {
        let raw = r#"{"type":"json","content":"{\"name\":\"Shoe\"}"}"#;
        let reply = ParsedReply::parse(raw);

        assert_eq!(
            reply,
            ParsedReply::JsonEnvelope {
                content: r#"{"name":"Shoe"}"#.to_string()
            }
        );
        assert_eq!(reply.into_message().kind, MessageKind::Json);
    }

    #[test]
    fn test_json_envelope_reserializes_object_content() {
        let raw = r#"{"type":"json","content":{"name":"Shoe","price":10}}"#;
        let ParsedReply::JsonEnvelope { content } = ParsedReply::parse(raw) else {
            panic!("expected a json envelope");
        };

        // Content came back as a JSON string, parseable again.
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["name"], "Shoe");
    }

    #[test]
    fn test_bare_product_reply() {
        let raw = r#"{"name":"Shoe","description":"d","brand":"B","category":"C","price":10}"#;
        let reply = ParsedReply::parse(raw);

        let ParsedReply::Product { content } = &reply else {
            panic!("expected a product reply");
        };
        let value: Value = serde_json::from_str(content).unwrap();
        assert_eq!(value["price"], 10);

        assert_eq!(reply.into_message().kind, MessageKind::Json);
    }

    #[test]
    fn test_product_requires_defined_price() {
        let raw = r#"{"name":"Shoe","description":"d","brand":"B","category":"C"}"#;
        let reply = ParsedReply::parse(raw);
        assert_eq!(
            reply,
            ParsedReply::Plain {
                content: raw.to_string()
            }
        );
    }

    #[test]
    fn test_text_envelope_content_taken_verbatim() {
        let raw = r#"{"type":"text","content":"How can I help?"}"#;
        let reply = ParsedReply::parse(raw);

        assert_eq!(
            reply,
            ParsedReply::TextEnvelope {
                content: "How can I help?".to_string()
            }
        );
        let msg = reply.into_message();
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.content, "How can I help?");
    }

    #[test]
    fn test_unknown_object_falls_back_to_raw_string() {
        let raw = r#"{"status":"ok"}"#;
        let reply = ParsedReply::parse(raw);
        assert_eq!(
            reply,
            ParsedReply::Plain {
                content: raw.to_string()
            }
        );
    }

    #[test]
    fn test_json_envelope_wins_over_product_shape() {
        // An envelope that also happens to carry product-like fields is still
        // an envelope: first match wins.
        let raw = r#"{"type":"json","content":"x","name":"Shoe","description":"d","brand":"B","category":"C","price":1}"#;
        assert!(matches!(
            ParsedReply::parse(raw),
            ParsedReply::JsonEnvelope { .. }
        ));
    }

    #[test]
    fn test_empty_envelope_content_disqualifies() {
        let raw = r#"{"type":"text","content":""}"#;
        assert_eq!(
            ParsedReply::parse(raw),
            ParsedReply::Plain {
                content: raw.to_string()
            }
        );
    }
}
