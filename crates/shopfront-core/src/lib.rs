#![deny(missing_docs)]

//! # shopfront-core — Foundational Types for the shopfront Client
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde` and `thiserror`
//! from the external ecosystem, and no transport assumptions of any kind.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for catalog identifiers.** Every identifier is a
//!    distinct type. You cannot pass a [`CollectionId`] where a
//!    [`ProductId`] is expected.
//!
//! 2. **[`CatalogService`] is the sole fetch boundary.** Screens consume it
//!    generically; the HTTP client implements it; tests fake it. Nothing
//!    above this trait knows whether the catalog speaks GraphQL, REST, or
//!    lives in memory.
//!
//! 3. **Structured errors with `thiserror`.** No `Box<dyn Error>`, no
//!    `.unwrap()` outside tests. Catalog failures stop at the fetch
//!    boundary and surface as empty data, never as panics.
//!
//! 4. **Degradation over failure for display data.** A product missing a
//!    display field is excluded; a missing or unparsable price renders
//!    blank. Malformed catalog entries never take a screen down.

pub mod catalog;
pub mod error;
pub mod ids;
pub mod service;

// Re-export primary types at crate root for ergonomic imports.
pub use catalog::{Collection, Price, Product, ProductWithVariants, Variant};
pub use error::{CatalogError, SelectionError, ValidationError};
pub use ids::{CollectionId, ProductId, VariantId};
pub use service::{CatalogService, COLLECTIONS_FIRST, PRODUCTS_FIRST, VARIANTS_FIRST};
