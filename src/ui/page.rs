//! Full-page application shell.

use leptos::prelude::*;

use crate::ui::chat::ChatShell;

/// Render the chat page served on `GET /`.
#[must_use]
pub fn render_page() -> String {
    view! {
        <!doctype html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="Shopping assistant chat" />

                <title>"Shopping Assistant"</title>

                <script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js"></script>
                <script defer src="/static/main.js"></script>
                <link rel="stylesheet" href="/static/app.css" />
            </head>

            <body>
                <div id="app-shell">
                    <main id="app">
                        <ChatShell title="Shopping Assistant" />
                    </main>
                </div>
            </body>
        </html>
    }
    .to_html()
}
