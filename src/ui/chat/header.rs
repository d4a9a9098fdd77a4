//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::ShoppingBagIcon;

/// Chat header with title.
#[component]
pub fn ChatHeader(
    /// Title displayed in the header.
    #[prop(default = "Chat")]
    title: &'static str,
) -> impl IntoView {
    view! {
        <header class="chat-header">
            <div class="chat-header__title">
                <ShoppingBagIcon class="icon--primary" />
                <h2>{title}</h2>
            </div>
        </header>
    }
}
