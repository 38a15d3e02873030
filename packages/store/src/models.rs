//! # Marketplace models
//!
//! [`Product`] is the persisted shape of a marketplace entry. Field names are
//! camelCase on the wire (`imageUrl`, `sellerId`) so catalogues written by
//! earlier builds keep loading. [`ProductDraft`] is what the seller
//! dashboard form produces before an id and seller are attached.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
}

/// A validated product submission without id or seller.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum DraftError {
    #[error("Product name is required")]
    MissingName,
    #[error("Price must be a number of zero or more")]
    InvalidPrice,
}

impl ProductDraft {
    /// Validate raw form input. Surrounding whitespace is trimmed and an
    /// empty image URL becomes `None`.
    pub fn from_form(name: &str, price: &str, image_url: &str) -> Result<Self, DraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }
        let price: f64 = price.trim().parse().map_err(|_| DraftError::InvalidPrice)?;
        if !price.is_finite() || price < 0.0 {
            return Err(DraftError::InvalidPrice);
        }
        let image_url = Some(image_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        Ok(Self {
            name: name.to_string(),
            price,
            image_url,
        })
    }
}

/// Format a price the way product cards show it: `$29.00`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_form() {
        let draft = ProductDraft::from_form("  HIIT Program ", "29", "  ").unwrap();
        assert_eq!(draft.name, "HIIT Program");
        assert_eq!(draft.price, 29.0);
        assert!(draft.image_url.is_none());

        let draft = ProductDraft::from_form("Bands", "12.5", "https://img/x.png").unwrap();
        assert_eq!(draft.image_url.as_deref(), Some("https://img/x.png"));
    }

    #[test]
    fn test_draft_rejects_bad_input() {
        assert_eq!(
            ProductDraft::from_form(" ", "10", ""),
            Err(DraftError::MissingName)
        );
        assert_eq!(
            ProductDraft::from_form("Plan", "ten", ""),
            Err(DraftError::InvalidPrice)
        );
        assert_eq!(
            ProductDraft::from_form("Plan", "-1", ""),
            Err(DraftError::InvalidPrice)
        );
        assert_eq!(
            ProductDraft::from_form("Plan", "NaN", ""),
            Err(DraftError::InvalidPrice)
        );
    }

    #[test]
    fn test_product_wire_names() {
        let json = r#"{"id":"p-9","name":"Pack","price":39,"imageUrl":"u","sellerId":"3"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image_url.as_deref(), Some("u"));
        assert_eq!(product.seller_id.as_deref(), Some("3"));

        let bare = Product {
            id: "p-1".into(),
            name: "Plan".into(),
            price: 29.0,
            image_url: None,
            seller_id: None,
        };
        let out = serde_json::to_string(&bare).unwrap();
        assert!(!out.contains("imageUrl"));
        assert!(!out.contains("sellerId"));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(29.0), "$29.00");
        assert_eq!(format_price(12.5), "$12.50");
    }
}
