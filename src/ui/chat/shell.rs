//! Chat shell layout component.

use leptos::prelude::*;

use super::{ChatHeader, ComposerForm};

/// Main chat shell component.
///
/// Provides the complete chat interface layout with:
/// - Header with title
/// - Scrollable message area (HTMX appends fragments to `#message-list`)
/// - Composer for new messages
#[component]
pub fn ChatShell(
    /// Title displayed in the header.
    #[prop(default = "Chat")]
    title: &'static str,
) -> impl IntoView {
    view! {
        <div class="chat-shell">
            <ChatHeader title=title />

            <div
                id="message-list"
                class="message-list"
                aria-live="polite"
                aria-label="Conversation"
            ></div>

            <ComposerForm />
        </div>
    }
}
