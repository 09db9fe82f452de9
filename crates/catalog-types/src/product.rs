use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::image::DataUri;
use crate::money::round_money;

/// Opaque product identifier, generated once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a ProductId from an existing string (e.g. a persisted record)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single catalog entry.
///
/// The serialized shape is the persisted layout: `id`, `name`, `price`,
/// `image` (data URI or `null`) and `createdAt` (epoch milliseconds).
///
/// Stored records are not validated: a missing field takes its default, and a
/// record without an id gets a fresh one so it can still be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default = "ProductId::generate")]
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: Option<DataUri>,
    #[serde(rename = "createdAt", default)]
    pub created_at: i64,
}

impl Product {
    /// Build a new product stamped with a fresh id and the current time.
    ///
    /// `price` is rounded to whole cents.
    pub fn new(name: impl Into<String>, price: f64, image: Option<DataUri>) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            price: round_money(price),
            image,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lower-cased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_rounds_price_and_stamps_metadata() {
        let before = Utc::now().timestamp_millis();
        let product = Product::new("Mug", 9.999, None);

        assert_eq!(product.price, 10.0);
        assert!(!product.id.as_str().is_empty());
        assert!(product.created_at >= before);
        assert!(product.image.is_none());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Product::new("A", 1.0, None);
        let b = Product::new("B", 1.0, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialized_shape_matches_storage_layout() {
        let product = Product {
            id: ProductId::new("p-1"),
            name: "Mug".to_string(),
            price: 9.5,
            image: None,
            created_at: 1_700_000_000_000,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "p-1",
                "name": "Mug",
                "price": 9.5,
                "image": null,
                "createdAt": 1_700_000_000_000i64
            })
        );
    }

    #[test]
    fn test_stored_record_with_missing_fields_loads() {
        let product: Product =
            serde_json::from_str(r#"{"id":"a","name":"Mug","price":9.5,"image":null}"#).unwrap();
        assert_eq!(product.id.as_str(), "a");
        assert_eq!(product.created_at, 0);

        let product: Product = serde_json::from_str(r#"{"name":"Lamp"}"#).unwrap();
        assert!(!product.id.as_str().is_empty());
        assert_eq!(product.price, 0.0);
        assert!(product.image.is_none());
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let product = Product::new("Apple Pie", 3.0, None);
        assert!(product.name_contains("ap"));
        assert!(product.name_contains("e p"));
        assert!(!product.name_contains("xyz"));
    }
}
