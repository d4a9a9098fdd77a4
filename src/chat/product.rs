//! Product payload carried in `Json`-kind messages.

use serde::{Deserialize, Serialize};

/// A shopping item described by the assistant.
///
/// Derived transiently from a message's JSON content at render time; never
/// persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    /// Base64-encoded JPEG, if the backend attached one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_encoded: Option<String>,
}

impl Product {
    /// Parse a product out of a message's JSON content.
    pub fn from_content(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Format a price with locale-style digit grouping.
///
/// Whole amounts render without a fractional part (`1234` becomes `1,234`),
/// fractional amounts with two decimals (`1234.5` becomes `1,234.50`).
#[must_use]
pub fn format_price(price: f64) -> String {
    let negative = price.is_sign_negative() && price != 0.0;
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if fraction > 0 {
        out.push_str(&format!(".{fraction:02}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product() {
        let content = r#"{
            "name": "Shoe",
            "description": "A running shoe",
            "brand": "B",
            "category": "Footwear",
            "price": 99.5
        }"#;

        let product = Product::from_content(content).unwrap();
        assert_eq!(product.name, "Shoe");
        assert_eq!(product.brand, "B");
        assert!(product.image_encoded.is_none());
    }

    #[test]
    fn test_parse_product_rejects_missing_fields() {
        let content = r#"{"name": "Shoe", "price": 10}"#;
        assert!(Product::from_content(content).is_err());
    }

    #[test]
    fn test_parse_product_keeps_embedded_image() {
        let content = r#"{
            "name": "Bag",
            "description": "d",
            "brand": "B",
            "category": "C",
            "price": 10,
            "image_encoded": "AAAA"
        }"#;

        let product = Product::from_content(content).unwrap();
        assert_eq!(product.image_encoded.as_deref(), Some("AAAA"));
    }

    #[test]
    fn test_format_price_whole() {
        assert_eq!(format_price(10.0), "10");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(1234.0), "1,234");
        assert_eq!(format_price(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_format_price_fractional() {
        assert_eq!(format_price(1234.5), "1,234.50");
        assert_eq!(format_price(0.99), "0.99");
        assert_eq!(format_price(1_999_999.99), "1,999,999.99");
    }

    #[test]
    fn test_format_price_rounds_up_to_next_whole() {
        // 9.999 rounds to 10.00, which renders as a whole amount.
        assert_eq!(format_price(9.999), "10");
    }
}
