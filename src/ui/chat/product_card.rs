//! Product card rendering for `Json`-kind messages.

use leptos::prelude::*;

use crate::chat::product::{Product, format_price};
use crate::ui::components::{AlertIcon, Card, CardContent, CardHeader};

/// Structured rendering of a product payload.
#[component]
pub fn ProductCard(
    /// Parsed product payload.
    product: Product,
    /// Align to the end of the row (user messages).
    #[prop(default = false)]
    align_end: bool,
) -> impl IntoView {
    let row_class = if align_end {
        "message-row message-row--user"
    } else {
        "message-row message-row--assistant"
    };
    let price = format!("${}", format_price(product.price));
    let image = product.image_encoded.clone().map(|encoded| {
        let src = format!("data:image/jpeg;base64,{encoded}");
        let alt = product.name.clone();
        view! {
            <div class="product-card__image">
                <img src=src alt=alt />
            </div>
        }
    });

    view! {
        <div class=row_class>
            <Card class="product-card">
                <CardHeader>
                    <h3 class="product-card__name">{product.name}</h3>
                    <p class="product-card__brand">{product.brand}</p>
                </CardHeader>
                <CardContent>
                    <p class="product-card__description">{product.description}</p>
                    <p class="product-card__category">"Category: " {product.category}</p>
                    <p class="product-card__price">{price}</p>
                    {image}
                </CardContent>
            </Card>
        </div>
    }
}

/// Visible notice shown when a `Json` message's content fails to parse as a
/// product, instead of breaking the conversation.
#[component]
pub fn ProductErrorNotice(
    /// Align to the end of the row (user messages).
    #[prop(default = false)]
    align_end: bool,
) -> impl IntoView {
    let row_class = if align_end {
        "message-row message-row--user"
    } else {
        "message-row message-row--assistant"
    };

    view! {
        <div class=row_class>
            <div class="bubble bubble--error">
                <AlertIcon />
                <span>"Error displaying product information"</span>
            </div>
        </div>
    }
}
