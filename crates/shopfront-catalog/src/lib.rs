//! # shopfront-catalog — Typed Client for the mock.shop Storefront API
//!
//! Implements [`shopfront_core::CatalogService`] over GraphQL-over-HTTP.
//! Single endpoint (default `https://mock.shop/api`), three operations:
//!
//! | Operation | Document | Used by |
//! |-----------|----------|---------|
//! | `fetch_collections` | `HomeCollections($first)` | home screen |
//! | `fetch_products` | `HomeProducts($first, $variantsFirst)` | home screen |
//! | `fetch_product` | `ProductDetail($id, $variantsFirst)` | detail screen |
//!
//! The wire layer tolerates schema evolution (`#[serde(default)]`,
//! unknown fields ignored) and drops malformed nodes at the mapping
//! boundary instead of failing the whole response. Transport specifics
//! never leak past this crate: everything surfaces as a
//! [`shopfront_core::CatalogError`].

pub mod config;

mod client;
mod graphql;

pub use client::CatalogClient;
pub use config::{CatalogConfig, ConfigError};
