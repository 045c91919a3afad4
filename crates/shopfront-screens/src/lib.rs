//! # shopfront-screens — Screen Cores for the shopfront Client
//!
//! The two screens' data logic, free of any presentation concern:
//!
//! - [`home`] — pairs fetched collections with fixed windows of the
//!   fetched, display-filtered product list.
//! - [`product`] — the detail view's variant-selection state machine and
//!   add-to-cart intent derivation, with a stale-response guard for fast
//!   navigation.
//!
//! Both consume the catalog generically through
//! [`shopfront_core::CatalogService`] and produce plain values for a
//! presentation layer to render. Catalog failures never escape: they are
//! logged and the screens fall back to their empty states.

pub mod home;
pub mod product;

pub use home::{assign_windows, load_home, HomeSection, HomeView, HOME_WINDOW};
pub use product::{
    CartIntent, LoadTicket, ProductDetailController, Selection, SELECT_VARIANT_PROMPT,
};
