//! # Product Detail Controller
//!
//! Owns one detail view's state: the loaded product with its variants,
//! and the user's variant selection. The selection machine is small —
//! `None` or `Chosen(title)` — but its transitions carry the view's real
//! invariants:
//!
//! - a chosen title always names a variant of the *currently loaded*
//!   product (selection is validated when made, and cleared on every
//!   navigation);
//! - a late-arriving fetch response for a product the user has already
//!   navigated away from is discarded, never applied ([`LoadTicket`]).
//!
//! Add-to-cart derives an outcome value only: a [`CartIntent`] on
//! success, a [`SelectionError`] when no variant is chosen. No cart
//! store exists here — presenting and persisting the intent belongs to
//! collaborators.

use serde::Serialize;

use shopfront_core::{
    CatalogError, CatalogService, ProductId, ProductWithVariants, SelectionError,
};

/// The user-facing prompt shown when add-to-cart is attempted with no
/// variant chosen.
pub const SELECT_VARIANT_PROMPT: &str = "Please select a variant";

/// The user's variant choice within one detail-view session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No variant chosen yet. Initial state after every load.
    #[default]
    None,
    /// The title of the chosen variant.
    Chosen(String),
}

/// Pairs an issued detail fetch with the product id it was issued for.
///
/// The controller only accepts a fetched result accompanied by the
/// ticket of the *current* request; tickets from superseded requests
/// identify stale responses, which are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    id: ProductId,
}

impl LoadTicket {
    /// The product id this fetch was issued for.
    pub fn product_id(&self) -> &ProductId {
        &self.id
    }
}

/// A description of the user's request to add a specific product+variant
/// to a cart. Not a persisted cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartIntent {
    /// Title of the product being added.
    pub product_title: String,
    /// Title of the chosen variant.
    pub variant_title: String,
}

impl CartIntent {
    /// The user-facing confirmation message.
    pub fn notification(&self) -> String {
        format!(
            "Added \"{}\" {} to cart",
            self.variant_title, self.product_title
        )
    }
}

/// State for one product detail view.
#[derive(Debug, Default)]
pub struct ProductDetailController {
    /// The id most recently requested; responses for anything else are stale.
    current: Option<ProductId>,
    detail: Option<ProductWithVariants>,
    selection: Selection,
}

impl ProductDetailController {
    /// Create a controller with nothing loaded and nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as the product now being displayed and clear all state
    /// from the previous product: the view renders its loading-equivalent
    /// blank state until a matching response is applied. Returns the
    /// ticket that must accompany the fetched result.
    pub fn begin_load(&mut self, id: ProductId) -> LoadTicket {
        self.current = Some(id.clone());
        self.detail = None;
        self.selection = Selection::None;
        LoadTicket { id }
    }

    /// Install a fetched result.
    ///
    /// A result whose ticket no longer matches the current request is
    /// stale — the user has navigated on — and is discarded. A fetch
    /// failure is logged and leaves the blank state in place; it is not
    /// retried.
    pub fn apply(&mut self, ticket: &LoadTicket, result: Result<ProductWithVariants, CatalogError>) {
        if self.current.as_ref() != Some(&ticket.id) {
            tracing::debug!(requested = %ticket.id, "discarding stale product response");
            return;
        }
        match result {
            Ok(detail) => self.detail = Some(detail),
            Err(e) => {
                tracing::warn!(product = %ticket.id, error = %e, "product fetch failed; view stays blank");
            }
        }
    }

    /// Fetch and install `id` in one step: `begin_load`, fetch, `apply`.
    pub async fn load<C: CatalogService>(&mut self, catalog: &C, id: ProductId) {
        let ticket = self.begin_load(id);
        let result = catalog.fetch_product(ticket.product_id()).await;
        self.apply(&ticket, result);
    }

    /// The loaded product and variants, if a fetch has completed.
    pub fn detail(&self) -> Option<&ProductWithVariants> {
        self.detail.as_ref()
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Choose a variant by title. Re-selection overwrites.
    ///
    /// The title must name a variant of the loaded product; anything else
    /// is rejected and leaves the selection unchanged. (With nothing
    /// loaded there are no variants, so every title is rejected.)
    pub fn select_variant(&mut self, title: &str) -> Result<(), SelectionError> {
        let known = self
            .detail
            .as_ref()
            .is_some_and(|d| d.has_variant_titled(title));
        if !known {
            return Err(SelectionError::UnknownVariant {
                title: title.to_string(),
            });
        }
        self.selection = Selection::Chosen(title.to_string());
        Ok(())
    }

    /// Derive the add-to-cart outcome from the current selection.
    ///
    /// Never mutates anything: the returned [`CartIntent`] is a value for
    /// collaborators to act on, and the error case is a recoverable
    /// prompt to select a variant first.
    pub fn add_to_cart(&self) -> Result<CartIntent, SelectionError> {
        match &self.selection {
            Selection::None => Err(SelectionError::NoVariantSelected),
            Selection::Chosen(title) => Ok(CartIntent {
                product_title: self
                    .detail
                    .as_ref()
                    .map(|d| d.product.title.clone())
                    .unwrap_or_default(),
                variant_title: title.clone(),
            }),
        }
    }
}
