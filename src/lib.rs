//! Shopping Assistant Chat UI
//!
//! An HTML-first chat interface for a shopping assistant: a scrolling
//! conversation, a composer that accepts text and optionally one attached
//! image, a single round-trip per submit to a remote `/chat` endpoint, and
//! replies rendered as plain text or as a structured product card.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server serving the page and the submit handler
//! - **Backend client**: one reqwest POST per submit to the assistant backend
//! - **UI**: Leptos SSR components wired with HTMX; the conversation log lives
//!   in the DOM as an append-only list of fragments
//!
//! # Modules
//!
//! - [`chat`]: message/product data model, backend client, reply interpretation
//! - [`config`]: CLI, environment, and file configuration
//! - [`server`]: router and handlers
//! - [`ui`]: page shell and fragment renderers

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]

pub mod chat;
pub mod config;
pub mod server;
pub mod ui;

use std::sync::Arc;

use crate::chat::BackendClient;
use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the assistant backend's `/chat` endpoint.
    pub backend: Arc<BackendClient>,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}
