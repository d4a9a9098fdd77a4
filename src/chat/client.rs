//! HTTP client for the remote assistant `/chat` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Request body for the assistant backend.
///
/// Every field is optional and serialized only when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// Base64-encoded image bytes, without any data-URL prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_image: Option<String>,
    /// User message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Session id echoed from an earlier reply, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// Build the outgoing request from composer state.
    ///
    /// Returns `None` when there is nothing to send: text that is empty or
    /// whitespace-only and no attached image. Whitespace-only text with an
    /// image attached still sends, but without a `message` field.
    #[must_use]
    pub fn compose(
        text: &str,
        raw_image: Option<String>,
        session_id: Option<String>,
    ) -> Option<Self> {
        let has_text = !text.trim().is_empty();
        if !has_text && raw_image.is_none() {
            return None;
        }

        Some(Self {
            raw_image,
            message: has_text.then(|| text.to_string()),
            session_id,
        })
    }
}

/// Successful reply from the assistant backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// Server-issued conversation token, echoed on the next request.
    pub session_id: String,
    /// Opaque reply payload; see [`ParsedReply`](crate::chat::ParsedReply).
    pub response: String,
}

/// Failure talking to the assistant backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport failure or undecodable success body.
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx status from the backend.
    #[error("backend returned {status}")]
    Status {
        status: reqwest::StatusCode,
        /// `detail` field from the error body, when one could be read.
        detail: Option<String>,
    },
}

impl BackendError {
    /// The message shown in the conversation for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => format!("Error: {detail}"),
            _ => "Error: Unknown error occurred".to_string(),
        }
    }
}

/// Client for the assistant backend's `/chat` endpoint.
///
/// One round-trip per submit; no retry and no request timeout.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    chat_url: String,
}

impl BackendClient {
    /// Create a client posting to the given `/chat` URL.
    #[must_use]
    pub fn new(chat_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            chat_url: chat_url.into(),
        }
    }

    /// The configured endpoint URL.
    #[must_use]
    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    /// Post one chat turn and decode the reply.
    ///
    /// On a non-2xx status the error body's `detail` field is read
    /// defensively; an unexpected error shape simply yields no detail.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatReply, BackendError> {
        let response = self.http.post(&self.chat_url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .as_ref()
                .and_then(|body| body.get("detail"))
                .and_then(Value::as_str)
                .map(ToString::to_string);
            return Err(BackendError::Status { status, detail });
        }

        Ok(response.json::<ChatReply>().await?)
    }
}
