//! Reusable UI components.

mod button;
mod card;
mod icons;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader};
pub use icons::{AlertIcon, ImageIcon, SendIcon, ShoppingBagIcon};
