//! Chat domain: messages, products, the backend client, and reply
//! interpretation.
//!
//! The conversation itself lives in the page as an append-only list of
//! rendered message fragments; this module owns the data shapes behind those
//! fragments and the single network round-trip per submit.
//!
//! # Structure
//!
//! - [`message`]: conversation message record and sender/kind discriminants
//! - [`product`]: product payload parsed out of `Json`-kind messages
//! - [`client`]: HTTP client for the remote assistant `/chat` endpoint
//! - [`reply`]: closed-set interpretation of the backend's reply string

pub mod client;
pub mod message;
pub mod product;
pub mod reply;

pub use client::{BackendClient, BackendError, ChatReply, ChatRequest};
pub use message::{Message, MessageKind, Sender};
pub use product::Product;
pub use reply::ParsedReply;
