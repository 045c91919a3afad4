//! # The Catalog Fetch Boundary
//!
//! [`CatalogService`] is the only way screens obtain catalog data. The
//! concrete HTTP client implements it; screen tests implement it over
//! in-memory fixtures. Consumers are generic over the trait, so nothing
//! above this boundary knows or cares how the data is transported.
//!
//! The storefront fetches fixed first-page windows and nothing more — no
//! cursors, no follow-up pages. The window constants live here because
//! they are part of the interface contract between screens and service.

use crate::catalog::{Collection, Product, ProductWithVariants};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// Number of collections the home screen requests.
pub const COLLECTIONS_FIRST: usize = 2;

/// Number of products the home screen requests.
pub const PRODUCTS_FIRST: usize = 4;

/// Number of variants requested per product.
pub const VARIANTS_FIRST: usize = 3;

/// Read access to the remote product catalog.
///
/// All methods are async and fallible; a [`CatalogError`] stops at the
/// caller, which logs it and renders an empty state. Implementations
/// must preserve the catalog's ordering — window assignment on the home
/// screen is positional.
#[allow(async_fn_in_trait)]
pub trait CatalogService {
    /// Fetch the first `first` collections, in catalog order.
    async fn fetch_collections(&self, first: usize) -> Result<Vec<Collection>, CatalogError>;

    /// Fetch the first `first` products, in catalog order, each carrying
    /// its first variant's price.
    async fn fetch_products(&self, first: usize) -> Result<Vec<Product>, CatalogError>;

    /// Fetch one product with its variant list (first [`VARIANTS_FIRST`]
    /// variants). Fails with [`CatalogError::UnknownProduct`] when the
    /// catalog does not know `id`.
    async fn fetch_product(&self, id: &ProductId) -> Result<ProductWithVariants, CatalogError>;
}
