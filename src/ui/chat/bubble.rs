//! Message bubble rendering.

use leptos::prelude::*;

use crate::chat::{Message, MessageKind, Product, Sender};

use super::{ProductCard, ProductErrorNotice};

/// A plain-text message bubble, optionally with an attached image.
#[component]
pub fn MessageBubble(
    /// Message text.
    content: String,
    /// Data URL of an attached image, if any.
    #[prop(optional_no_strip)]
    image_url: Option<String>,
    /// Align to the end of the row (user messages).
    #[prop(default = false)]
    align_end: bool,
) -> impl IntoView {
    let row_class = if align_end {
        "message-row message-row--user"
    } else {
        "message-row message-row--assistant"
    };
    let bubble_class = if align_end {
        "bubble bubble--user"
    } else {
        "bubble bubble--assistant"
    };
    let image = image_url.map(|src| {
        view! {
            <div class="bubble__image">
                <img src=src alt="Attached image" />
            </div>
        }
    });

    view! {
        <div class=row_class>
            <div class=bubble_class>
                {image}
                <p>{content}</p>
            </div>
        </div>
    }
}

/// Render one conversation message to an HTML fragment.
///
/// `Json` messages render as a product card; content that fails to parse as a
/// product renders as a visible error notice rather than failing the request.
#[must_use]
pub fn render_message(message: &Message) -> String {
    let align_end = message.sender == Sender::User;

    match message.kind {
        MessageKind::Json => match Product::from_content(&message.content) {
            Ok(product) => {
                view! { <ProductCard product=product align_end=align_end /> }.to_html()
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to parse product payload");
                view! { <ProductErrorNotice align_end=align_end /> }.to_html()
            }
        },
        MessageKind::Text => view! {
            <MessageBubble
                content=message.content.clone()
                image_url=message.image_url.clone()
                align_end=align_end
            />
        }
        .to_html(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_renders_content() {
        let html = render_message(&Message::assistant_text("hello"));

        assert!(html.contains("hello"));
        assert!(html.contains("message-row--assistant"));
        assert!(!html.contains("bubble__image"));
    }

    #[test]
    fn test_user_message_aligns_end_and_shows_image() {
        let msg = Message::user("look", Some("data:image/png;base64,AAAA".to_string()));
        let html = render_message(&msg);

        assert!(html.contains("message-row--user"));
        assert!(html.contains("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_json_message_renders_product_card() {
        let content =
            r#"{"name":"Shoe","description":"d","brand":"B","category":"C","price":10}"#;
        let msg = Message::assistant(MessageKind::Json, content);
        let html = render_message(&msg);

        assert!(html.contains("product-card"));
        assert!(html.contains("Shoe"));
        assert!(html.contains("$10"));
        assert!(html.contains("Category: "));
    }

    #[test]
    fn test_json_message_with_bad_payload_renders_error_notice() {
        let msg = Message::assistant(MessageKind::Json, "not a product");
        let html = render_message(&msg);

        assert!(html.contains("Error displaying product information"));
    }

    #[test]
    fn test_product_price_grouping() {
        let content =
            r#"{"name":"Sofa","description":"d","brand":"B","category":"C","price":1234.5}"#;
        let msg = Message::assistant(MessageKind::Json, content);
        let html = render_message(&msg);

        assert!(html.contains("$1,234.50"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let msg = Message::assistant_text("<script>alert(1)</script>");
        let html = render_message(&msg);

        assert!(!html.contains("<script>"));
    }
}
