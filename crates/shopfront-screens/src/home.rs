//! # Home Composition
//!
//! The home screen shows a hero banner and one section per fetched
//! collection, each section holding a fixed-size window of products.
//!
//! ## Windowing policy
//!
//! The catalog's first collection page and first product page have no
//! actual relation to one another, so sections are filled positionally:
//! after filtering the product list down to displayable products
//! (preserving catalog order), collection `i` receives the contiguous
//! slice `[i * window, i * window + window)` of the filtered sequence.
//! Slices truncate at the end of the sequence — a section with fewer
//! products than the window, or none at all, is a normal outcome.
//!
//! Windows never overlap: a product appears in at most one section per
//! composition pass, and a product dropped by the display filter appears
//! in none.

use serde::Serialize;

use shopfront_core::{
    CatalogService, Collection, Product, COLLECTIONS_FIRST, PRODUCTS_FIRST,
};

/// Number of products each collection section holds.
pub const HOME_WINDOW: usize = 2;

/// Hero banner shown above the collection sections.
pub const HERO_IMAGE_URL: &str = "https://marketplace.canva.com/EAFw2F62lZw/1/0/1600w/canva-simple-modern-photo-collage-autumn-fashion-sale-banner-hZQHBJfu4c4.jpg";

/// One collection paired with its assigned product window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSection {
    /// The collection heading the section.
    pub collection: Collection,
    /// Its window of displayable products, in catalog order.
    pub products: Vec<Product>,
}

/// The composed home screen. Empty when the catalog could not be read.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeView {
    /// Collection sections in catalog order.
    pub sections: Vec<HomeSection>,
}

impl HomeView {
    /// Whether the view has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Pair each collection with its window of displayable products.
///
/// Pure and deterministic: identical inputs compose identical views, no
/// fetching happens here, and malformed products cost only themselves
/// (they are filtered, never propagated as errors).
pub fn assign_windows(
    collections: Vec<Collection>,
    products: Vec<Product>,
    window: usize,
) -> Vec<HomeSection> {
    let displayable: Vec<Product> = products
        .into_iter()
        .filter(Product::is_displayable)
        .collect();

    collections
        .into_iter()
        .enumerate()
        .map(|(index, collection)| {
            let start = index.saturating_mul(window).min(displayable.len());
            let end = start.saturating_add(window).min(displayable.len());
            HomeSection {
                collection,
                products: displayable[start..end].to_vec(),
            }
        })
        .collect()
}

/// Load and compose the home screen.
///
/// The collections and products fetches are issued concurrently; the
/// view is composed only once both have resolved. If either fails, the
/// failure is logged and the empty view is returned — no partial
/// composition, no error surface, no retry.
pub async fn load_home<C: CatalogService>(catalog: &C) -> HomeView {
    let (collections, products) = tokio::join!(
        catalog.fetch_collections(COLLECTIONS_FIRST),
        catalog.fetch_products(PRODUCTS_FIRST),
    );

    match (collections, products) {
        (Ok(collections), Ok(products)) => HomeView {
            sections: assign_windows(collections, products, HOME_WINDOW),
        },
        (collections, products) => {
            if let Err(e) = &collections {
                tracing::warn!(error = %e, "collections fetch failed; rendering empty home");
            }
            if let Err(e) = &products {
                tracing::warn!(error = %e, "products fetch failed; rendering empty home");
            }
            HomeView::default()
        }
    }
}
