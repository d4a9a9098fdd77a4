//! Chat composer: text input, image picker, and submit wiring.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonSize, ButtonVariant, ImageIcon, SendIcon};

/// Hidden input carrying the session id across submits.
///
/// The submit handler returns a replacement with `oob=true` so HTMX swaps the
/// new session id into the form out of band. `form.reset()` keeps the swapped
/// value because it is the element's default.
#[component]
pub fn SessionField(
    /// Current session id, empty before the first reply.
    value: String,
    /// Render as an HTMX out-of-band replacement.
    #[prop(default = false)]
    oob: bool,
) -> impl IntoView {
    view! {
        <input
            type="hidden"
            id="chat-session-id"
            name="session_id"
            value=value
            hx-swap-oob=oob.then_some("true")
        />
    }
}

/// Render the out-of-band session field fragment for a submit response.
#[must_use]
pub fn render_session_field_oob(session_id: &str) -> String {
    view! { <SessionField value=session_id.to_string() oob=true /> }.to_html()
}

/// Chat message composer with HTMX form submission.
///
/// Posts multipart to `/chat` and appends the returned fragments to
/// `#message-list`. Controls are disabled while a request is in flight so
/// replies cannot interleave out of submission order.
#[component]
pub fn ComposerForm() -> impl IntoView {
    view! {
        <div class="composer">
            <form
                id="composer-form"
                class="composer__form"
                hx-post="/chat"
                hx-target="#message-list"
                hx-swap="beforeend"
                hx-encoding="multipart/form-data"
                hx-disabled-elt="find textarea, find button"
                hx-on--after-request="this.reset(); document.getElementById('image-name').textContent = ''"
            >
                <SessionField value=String::new() />

                <input
                    type="file"
                    name="image"
                    id="image-upload"
                    accept="image/*"
                    class="hidden"
                />
                <label for="image-upload" class="composer__attach" title="Attach an image">
                    <ImageIcon />
                </label>
                <span id="image-name" class="composer__filename"></span>

                <textarea
                    name="message"
                    id="composer-text"
                    class="composer__input"
                    placeholder="Type your message..."
                    rows="1"
                ></textarea>

                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Icon
                    button_type="submit"
                    class="composer__send"
                >
                    <SendIcon />
                </Button>
            </form>

            <p class="composer__hint">"Press Enter to send"</p>
        </div>
    }
}
