//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the chat page and
//! the HTMX fragments appended to it on every submit.
//!
//! # Structure
//!
//! - [`page`]: full-page shell served on `GET /`
//! - [`components`]: reusable UI components (buttons, cards, icons)
//! - [`chat`]: chat-specific components and fragment renderers

pub mod chat;
pub mod components;
pub mod page;
