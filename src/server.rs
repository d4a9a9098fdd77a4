//! Axum router and handlers.
//!
//! The submit handler is the conversation composer: it validates the form,
//! encodes an attached image, forwards one request to the assistant backend,
//! interprets the reply, and returns the rendered message fragments that HTMX
//! appends to the conversation log.

use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::chat::{BackendClient, ChatRequest, Message, ParsedReply};
use crate::config::AppConfig;
use crate::ui::chat::{render_message, render_session_field_oob};
use crate::ui::page::render_page;

/// Maximum accepted upload size (10MB).
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let backend = Arc::new(BackendClient::new(config.backend.chat_url.clone()));
    let state = AppState {
        backend,
        config: config.clone(),
    };

    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_submit))
        .nest_service("/static", ServeDir::new("static"))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Chat page handler.
async fn index_handler() -> impl IntoResponse {
    Html(render_page())
}

/// An image file pulled out of the multipart form.
#[derive(Debug)]
struct AttachedImage {
    /// MIME type for the data-URL preview.
    content_type: String,
    /// Raw image bytes.
    data: Vec<u8>,
}

/// Composer form state collected from the multipart body.
#[derive(Debug, Default)]
struct SubmitForm {
    message: String,
    session_id: Option<String>,
    image: Option<AttachedImage>,
}

impl SubmitForm {
    /// Read the multipart fields the composer submits.
    ///
    /// Unknown fields are ignored. A file part with no bytes (the picker left
    /// empty) counts as no image.
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            match field.name() {
                Some("message") => form.message = field.text().await?,
                Some("session_id") => {
                    let value = field.text().await?;
                    if !value.is_empty() {
                        form.session_id = Some(value);
                    }
                }
                Some("image") => {
                    let file_name = field.file_name().map(ToString::to_string);
                    let content_type = field.content_type().map(ToString::to_string);
                    let data = field.bytes().await?;
                    if !data.is_empty() {
                        form.image = Some(AttachedImage {
                            content_type: resolve_image_mime(content_type, file_name.as_deref()),
                            data: data.to_vec(),
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

/// Pick a MIME type for the image preview data URL.
///
/// Prefers the multipart part's declared type, then a guess from the file
/// name's extension.
fn resolve_image_mime(declared: Option<String>, file_name: Option<&str>) -> String {
    declared
        .filter(|ct| !ct.is_empty())
        .or_else(|| {
            file_name.and_then(|name| {
                mime_guess::from_path(name)
                    .first()
                    .map(|mime| mime.essence_str().to_string())
            })
        })
        .unwrap_or_else(|| "application/octet-stream".to_string())
}

/// POST /chat - Submit one conversation turn.
///
/// Returns the user and assistant message fragments for `#message-list`, plus
/// an out-of-band session field update on success. An empty submit (no text,
/// no image) is a no-op and returns 204 with no fragments.
async fn chat_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, (StatusCode, String)> {
    let form = SubmitForm::from_multipart(multipart)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid form data: {e}")))?;

    // Image encoding must complete before the request goes out.
    let raw_image = form.image.as_ref().map(|img| BASE64.encode(&img.data));

    let Some(request) =
        ChatRequest::compose(&form.message, raw_image.clone(), form.session_id.clone())
    else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    tracing::info!(
        message_length = form.message.len(),
        has_image = form.image.is_some(),
        session_id = ?form.session_id,
        "Received chat submit"
    );

    let image_url = form
        .image
        .as_ref()
        .zip(raw_image.as_ref())
        .map(|(img, encoded)| format!("data:{};base64,{encoded}", img.content_type));
    let user_message = Message::user(form.message.clone(), image_url);

    let mut fragments = render_message(&user_message);

    match state.backend.send(&request).await {
        Ok(reply) => {
            tracing::info!(
                session_id = %reply.session_id,
                response_length = reply.response.len(),
                "Assistant reply received"
            );
            let assistant = ParsedReply::parse(&reply.response).into_message();
            fragments.push_str(&render_message(&assistant));
            fragments.push_str(&render_session_field_oob(&reply.session_id));
        }
        Err(error) => {
            tracing::error!(%error, "Chat backend request failed");
            let assistant = Message::assistant_text(error.user_message());
            fragments.push_str(&render_message(&assistant));
        }
    }

    Ok(Html(fragments).into_response())
}
