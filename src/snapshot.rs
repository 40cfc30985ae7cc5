//! Product card snapshot value objects.
//!
//! A snapshot is fully resolved by an external data collaborator before it
//! reaches the binder; no fetching, formatting, or validation happens
//! here. Fields are non-optional; a caller represents absence as an empty
//! string or zero. Wire shape is camelCase, matching the upstream data
//! contract.

use serde::{Deserialize, Serialize};

/// One render pass worth of product card data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardSnapshot {
    /// Product image URL.
    pub image_url: String,
    /// Product labels, positionally matched to the bound label slots.
    pub labels: Vec<ProductLabel>,
    /// Product display name.
    pub name_value: String,
    /// Product rating, forwarded to an external rating widget via event.
    pub rating_value: f64,
    /// Formatted current price.
    pub default_price: String,
    /// Formatted original (pre-discount) price.
    pub original_price: String,
    /// Detail page URL.
    pub detail_page_url: String,
    /// Add-to-cart URL; its final path segment is the SKU.
    pub add_to_cart_url: String,
}

impl ProductCardSnapshot {
    /// The SKU carried by the add-to-cart URL: its final `/`-delimited
    /// segment, e.g. `/cart/add/ABC-123` yields `ABC-123`.
    pub fn add_to_cart_sku(&self) -> &str {
        self.add_to_cart_url.rsplit('/').next().unwrap_or("")
    }
}

/// A product label (e.g., "new", "sale").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLabel {
    /// Label display text.
    pub text: String,
    /// Label category tag, used to build the slot's type-modifier class.
    #[serde(rename = "type")]
    pub label_type: String,
}

impl ProductLabel {
    pub fn new(text: impl Into<String>, label_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label_type: label_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_from_add_to_cart_url() {
        let snapshot = ProductCardSnapshot {
            add_to_cart_url: "/cart/add/ABC-123".to_string(),
            ..Default::default()
        };
        assert_eq!(snapshot.add_to_cart_sku(), "ABC-123");
    }

    #[test]
    fn test_sku_of_bare_segment() {
        let snapshot = ProductCardSnapshot {
            add_to_cart_url: "ABC-123".to_string(),
            ..Default::default()
        };
        assert_eq!(snapshot.add_to_cart_sku(), "ABC-123");
    }

    #[test]
    fn test_sku_of_trailing_slash_is_empty() {
        let snapshot = ProductCardSnapshot {
            add_to_cart_url: "/cart/add/".to_string(),
            ..Default::default()
        };
        assert_eq!(snapshot.add_to_cart_sku(), "");
    }

    #[test]
    fn test_label_wire_shape() {
        let label: ProductLabel =
            serde_json::from_str(r#"{"text": "Sale", "type": "sale"}"#).unwrap();
        assert_eq!(label, ProductLabel::new("Sale", "sale"));
    }
}
