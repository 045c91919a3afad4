//! # Catalog Identifier Newtypes
//!
//! Each catalog identifier is a distinct type — you cannot pass a
//! [`CollectionId`] where a [`ProductId`] is expected.
//!
//! The storefront API hands out opaque id strings (e.g.
//! `gid://shopify/Product/7982853619734`). No structure beyond
//! non-emptiness is assumed: the ids are compared and echoed back to the
//! API, never parsed. Emptiness is rejected at construction time so that
//! a malformed catalog entry can be dropped at the mapping boundary
//! instead of flowing into the screens.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A unique identifier for a merchandising collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionId(String);

impl CollectionId {
    /// Create a collection identifier. Rejects empty strings.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyCollectionId);
        }
        Ok(Self(id))
    }

    /// Access the underlying id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product identifier. Rejects empty strings.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyProductId);
        }
        Ok(Self(id))
    }

    /// Access the underlying id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantId(String);

impl VariantId {
    /// Create a variant identifier. Rejects empty strings.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyVariantId);
        }
        Ok(Self(id))
    }

    /// Access the underlying id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_accepts_gid_strings() {
        let id = ProductId::new("gid://shopify/Product/7982853619734").unwrap();
        assert_eq!(id.as_str(), "gid://shopify/Product/7982853619734");
        assert_eq!(id.to_string(), "gid://shopify/Product/7982853619734");
    }

    #[test]
    fn empty_ids_are_rejected() {
        assert!(matches!(
            CollectionId::new(""),
            Err(ValidationError::EmptyCollectionId)
        ));
        assert!(matches!(
            ProductId::new(""),
            Err(ValidationError::EmptyProductId)
        ));
        assert!(matches!(
            VariantId::new(""),
            Err(ValidationError::EmptyVariantId)
        ));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = CollectionId::new("gid://shopify/Collection/429512622").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"gid://shopify/Collection/429512622\"");
        let back: CollectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn ids_of_different_kinds_are_distinct_types() {
        // Identity comparisons only make sense within one kind; this is
        // enforced by the type system, so the test just pins equality.
        let a = VariantId::new("gid://shopify/ProductVariant/1").unwrap();
        let b = VariantId::new("gid://shopify/ProductVariant/1").unwrap();
        assert_eq!(a, b);
    }
}
