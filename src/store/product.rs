//! Product record types
//!
//! `Product` is the stored record. `ProductInput` is what a client may
//! supply on create or update; every field is optional on the wire:
//!
//! | field         | default |
//! |---------------|---------|
//! | `name`        | `""`    |
//! | `description` | `""`    |
//! | `price`       | `0.0`   |
//! | `stock`       | `0`     |
//!
//! An explicit `null` is treated the same as a missing field. Server-owned
//! fields (`id`, `created_at`, `updated_at`) are not part of the input and
//! are ignored if a client sends them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A product record as held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned id, immutable after creation
    pub id: i64,
    pub name: String,
    pub description: String,
    /// No range constraint; negative prices are accepted
    pub price: f64,
    pub stock: i64,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied product fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub stock: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductInput {
    /// Create an input with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the stock count
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }
}

impl Product {
    /// Build a fresh record from client input
    pub(crate) fn from_input(id: i64, input: ProductInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every client-owned field, keeping `id` and `created_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub(crate) fn replace_with(&mut self, input: ProductInput, now: DateTime<Utc>) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.stock = input.stock;
        self.updated_at = now.max(self.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_input_defaults_from_partial_json() {
        let input: ProductInput = serde_json::from_str(r#"{"name":"Widget","price":9.99}"#).unwrap();
        assert_eq!(input.name, "Widget");
        assert_eq!(input.description, "");
        assert_eq!(input.price, 9.99);
        assert_eq!(input.stock, 0);
    }

    #[test]
    fn test_input_null_fields_take_defaults() {
        let input: ProductInput = serde_json::from_str(
            r#"{"name":null,"description":null,"price":null,"stock":null}"#,
        )
        .unwrap();
        assert_eq!(input, ProductInput::default());

        let input: ProductInput = serde_json::from_str(r#"{"name":"a","description":null}"#).unwrap();
        assert_eq!(input, ProductInput::named("a"));
    }

    #[test]
    fn test_input_ignores_server_fields() {
        let input: ProductInput = serde_json::from_str(
            r#"{"id":42,"name":"Gadget","created_at":"2020-01-01T00:00:00Z","color":"red"}"#,
        )
        .unwrap();
        assert_eq!(input, ProductInput::named("Gadget"));
    }

    #[test]
    fn test_input_rejects_wrong_types() {
        assert!(serde_json::from_str::<ProductInput>(r#"{"price":"cheap"}"#).is_err());
        assert!(serde_json::from_str::<ProductInput>(r#"{"stock":1.5}"#).is_err());
        assert!(serde_json::from_str::<ProductInput>("[1,2]").is_err());
    }

    #[test]
    fn test_replace_keeps_identity() {
        let created = Utc::now();
        let mut product = Product::from_input(3, ProductInput::named("Old"), created);

        let later = created + Duration::seconds(5);
        product.replace_with(ProductInput::named("New").with_price(-1.0), later);

        assert_eq!(product.id, 3);
        assert_eq!(product.created_at, created);
        assert_eq!(product.updated_at, later);
        assert_eq!(product.name, "New");
        assert_eq!(product.price, -1.0);
    }

    #[test]
    fn test_updated_at_never_decreases() {
        let created = Utc::now();
        let mut product = Product::from_input(1, ProductInput::named("A"), created);

        product.replace_with(ProductInput::named("B"), created - Duration::seconds(30));

        assert_eq!(product.updated_at, created);
    }

    #[test]
    fn test_product_wire_format() {
        let product = Product::from_input(1, ProductInput::named("Widget"), Utc::now());
        let value = serde_json::to_value(&product).unwrap();

        for key in ["id", "name", "description", "price", "stock", "created_at", "updated_at"] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(value["id"], 1);
    }
}
