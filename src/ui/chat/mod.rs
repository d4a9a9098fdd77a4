//! Chat layout components and fragment renderers.

mod bubble;
mod header;
mod input_area;
mod product_card;
mod shell;

pub use bubble::{MessageBubble, render_message};
pub use header::ChatHeader;
pub use input_area::{ComposerForm, SessionField, render_session_field_oob};
pub use product_card::{ProductCard, ProductErrorNotice};
pub use shell::ChatShell;
