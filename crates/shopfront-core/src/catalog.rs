//! # Catalog Domain Model
//!
//! Plain values describing what the storefront sells: collections,
//! products, and product variants. All types are immutable once fetched;
//! identity is carried by the id newtypes from [`crate::ids`].
//!
//! Display degradation rules live here:
//!
//! - A product is *displayable* only when it has both a non-empty title
//!   and a featured image ([`Product::is_displayable`]). Anything else is
//!   excluded from merchandising surfaces entirely.
//! - A product's listed price is its first variant's price. Zero variants
//!   (or an unparsable amount on the wire) mean an absent price, which
//!   renders blank — never an error.

use serde::{Deserialize, Serialize};

use crate::ids::{CollectionId, ProductId, VariantId};

/// A named merchandising grouping of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Opaque collection identifier.
    pub id: CollectionId,
    /// URL-friendly handle, when the API provides one.
    pub handle: Option<String>,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Banner image URL, when present.
    pub image_url: Option<String>,
}

/// A price attached to a product or variant.
///
/// Display-only: the amount is never used for arithmetic, so a binary
/// float is sufficient. Amounts arrive on the wire as decimal strings;
/// anything unparsable degrades to an absent price upstream of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Decimal amount in the major unit of `currency_code`.
    pub amount: f64,
    /// ISO 4217 currency code as reported by the catalog (e.g. `USD`).
    pub currency_code: String,
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code)
    }
}

/// A sellable item with one or more purchasable variants.
///
/// On listing surfaces only the fields here are available; the full
/// variant list is fetched separately for the detail view (see
/// [`ProductWithVariants`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Featured image URL, when present.
    pub featured_image_url: Option<String>,
    /// The first variant's price, when the product has any variants.
    pub price: Option<Price>,
}

impl Product {
    /// Whether this product may appear on merchandising surfaces.
    ///
    /// Requires both a non-empty title and a featured image. A product
    /// failing this check is dropped from every surface, not just hidden
    /// on one.
    pub fn is_displayable(&self) -> bool {
        !self.title.is_empty()
            && self
                .featured_image_url
                .as_deref()
                .is_some_and(|url| !url.is_empty())
    }
}

/// A specific purchasable configuration of a product (e.g. a size),
/// carrying its own price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Opaque variant identifier.
    pub id: VariantId,
    /// Display title (e.g. `Small`).
    pub title: String,
    /// Variant image URL, when present.
    pub image_url: Option<String>,
    /// The variant's price, when the catalog reports one.
    pub price: Option<Price>,
}

/// A product together with its variant list, as loaded for one detail
/// view. The product exclusively owns the list for the lifetime of that
/// view; nothing else holds or mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithVariants {
    /// The product being viewed.
    pub product: Product,
    /// Its purchasable variants, in API order.
    pub variants: Vec<Variant>,
}

impl ProductWithVariants {
    /// Whether `title` names one of the loaded variants.
    pub fn has_variant_titled(&self, title: &str) -> bool {
        self.variants.iter().any(|v| v.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, image: Option<&str>) -> Product {
        Product {
            id: ProductId::new("gid://shopify/Product/1").unwrap(),
            title: title.to_string(),
            description: String::new(),
            featured_image_url: image.map(str::to_string),
            price: None,
        }
    }

    #[test]
    fn displayable_requires_title_and_image() {
        assert!(product("Shirt", Some("https://cdn.example/shirt.png")).is_displayable());
        assert!(!product("", Some("https://cdn.example/shirt.png")).is_displayable());
        assert!(!product("Shirt", None).is_displayable());
        assert!(!product("", None).is_displayable());
    }

    #[test]
    fn displayable_rejects_empty_image_url() {
        assert!(!product("Shirt", Some("")).is_displayable());
    }

    #[test]
    fn zero_variant_product_has_absent_price() {
        let p = product("Shirt", Some("https://cdn.example/shirt.png"));
        assert!(p.price.is_none());
    }

    #[test]
    fn price_display_includes_currency() {
        let price = Price {
            amount: 44.99,
            currency_code: "USD".to_string(),
        };
        assert_eq!(price.to_string(), "44.99 USD");
    }

    #[test]
    fn has_variant_titled_matches_exactly() {
        let detail = ProductWithVariants {
            product: product("Shirt", Some("https://cdn.example/shirt.png")),
            variants: vec![Variant {
                id: VariantId::new("gid://shopify/ProductVariant/1").unwrap(),
                title: "Small".to_string(),
                image_url: None,
                price: None,
            }],
        };
        assert!(detail.has_variant_titled("Small"));
        assert!(!detail.has_variant_titled("small"));
        assert!(!detail.has_variant_titled("Large"));
    }
}
