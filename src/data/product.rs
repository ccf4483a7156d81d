//! Product data models.

use serde::{Deserialize, Serialize};

/// Stock level at or below which the "only N left" badge shows.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Star rating shown for products that have not been rated yet.
pub const DEFAULT_RATING: f32 = 4.0;

/// A catalog product as served by the REST API.
///
/// Read-only snapshot per page view; never mutated locally, only
/// replaced wholesale by a re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier. The backend emits `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    /// Product name.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Current price in rupees.
    pub price: f64,
    /// Pre-discount price, shown struck through when above `price`.
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Discount percentage, shown as a "Save N%" badge when positive.
    #[serde(default)]
    pub discount: Option<u8>,
    /// Purchasable units on hand.
    #[serde(default)]
    pub stock: u32,
    /// Average star rating (0-5).
    #[serde(default)]
    pub rating: Option<f32>,
    /// Number of customer reviews.
    #[serde(default)]
    pub review_count: Option<u32>,
    /// Ordered product images.
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Category used to look up related products.
    #[serde(default)]
    pub category: Option<String>,
    /// Key feature bullet points.
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl Product {
    /// Check if no units are purchasable.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Check if stock is low but not exhausted.
    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock <= LOW_STOCK_THRESHOLD
    }

    /// Stock badge label.
    pub fn stock_label(&self) -> String {
        if self.is_out_of_stock() {
            "Sold Out".to_string()
        } else if self.is_low_stock() {
            format!("Only {} left!", self.stock)
        } else {
            format!("{} available", self.stock)
        }
    }

    /// Stock badge CSS class.
    pub fn stock_class(&self) -> &'static str {
        if self.is_out_of_stock() {
            "stock-badge--out"
        } else if self.is_low_stock() {
            "stock-badge--low"
        } else {
            "stock-badge--ok"
        }
    }

    /// Rating to display, defaulting to four stars when unrated.
    pub fn display_rating(&self) -> f32 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    /// Review count to display.
    pub fn display_review_count(&self) -> u32 {
        self.review_count.unwrap_or(0)
    }

    /// URL of the first image, if any.
    pub fn primary_image_url(&self) -> Option<&str> {
        self.images.first().map(|img| img.url.as_str())
    }
}

/// A normalized product image reference.
///
/// The backend serves images either as bare URL strings or as
/// `{ "url": ..., "alt": ... }` objects; both shapes normalize to this
/// type at the deserialization boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RawImageRef")]
pub struct ImageRef {
    /// URL of the image file.
    pub url: String,
    /// Alt text for accessibility.
    pub alt: Option<String>,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
        }
    }
}

/// Wire shapes accepted for a product image.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawImageRef {
    Url(String),
    Object {
        url: String,
        #[serde(default)]
        alt: Option<String>,
    },
}

impl From<RawImageRef> for ImageRef {
    fn from(raw: RawImageRef) -> Self {
        match raw {
            RawImageRef::Url(url) => Self { url, alt: None },
            RawImageRef::Object { url, alt } => Self { url, alt },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Lavender Bar".to_string(),
            description: String::new(),
            price: 500.0,
            original_price: None,
            discount: None,
            stock,
            rating: None,
            review_count: None,
            images: Vec::new(),
            category: None,
            features: None,
        }
    }

    #[test]
    fn test_stock_states() {
        assert!(product(0).is_out_of_stock());
        assert!(!product(0).is_low_stock());
        assert!(product(3).is_low_stock());
        assert!(!product(6).is_low_stock());
        assert_eq!(product(0).stock_label(), "Sold Out");
        assert_eq!(product(3).stock_label(), "Only 3 left!");
        assert_eq!(product(12).stock_label(), "12 available");
    }

    #[test]
    fn test_display_defaults() {
        let p = product(1);
        assert_eq!(p.display_rating(), DEFAULT_RATING);
        assert_eq!(p.display_review_count(), 0);
    }

    #[test]
    fn test_image_ref_accepts_both_wire_shapes() {
        let images: Vec<ImageRef> = serde_json::from_str(
            r#"["https://cdn.example/a.jpg", {"url": "https://cdn.example/b.jpg", "alt": "Soap bar"}]"#,
        )
        .unwrap();
        assert_eq!(images[0].url, "https://cdn.example/a.jpg");
        assert_eq!(images[0].alt, None);
        assert_eq!(images[1].url, "https://cdn.example/b.jpg");
        assert_eq!(images[1].alt.as_deref(), Some("Soap bar"));
    }

    #[test]
    fn test_product_accepts_mongo_id_and_camel_case() {
        let p: Product = serde_json::from_str(
            r#"{
                "_id": "abc123",
                "name": "Tea Tree Bar",
                "price": 450,
                "originalPrice": 600,
                "discount": 25,
                "stock": 8,
                "reviewCount": 12,
                "images": ["https://cdn.example/t.jpg"],
                "category": "soap"
            }"#,
        )
        .unwrap();
        assert_eq!(p.id, "abc123");
        assert_eq!(p.original_price, Some(600.0));
        assert_eq!(p.discount, Some(25));
        assert_eq!(p.display_review_count(), 12);
        assert_eq!(p.primary_image_url(), Some("https://cdn.example/t.jpg"));
    }
}
