//! # Error Hierarchy
//!
//! Structured error types for the shopfront client, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Three families, with distinct propagation rules:
//!
//! - [`CatalogError`] — transport/query failure at the fetch boundary.
//!   Logged and surfaced as empty data; never reaches a screen as a panic
//!   and is never retried automatically.
//! - [`ValidationError`] — a malformed domain primitive. Catalog entries
//!   failing validation are dropped at the mapping boundary.
//! - [`SelectionError`] — the user omitted or mis-specified a required
//!   selection. Recoverable; surfaced as a blocking notification.

use thiserror::Error;

/// Errors raised at the catalog fetch boundary.
///
/// Deliberately transport-agnostic: variants carry the logical endpoint
/// and diagnostic strings rather than HTTP library types, because the
/// [`crate::CatalogService`] contract must not assume any particular
/// transport. The concrete client maps its transport failures into these
/// variants at the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The request never produced a response (connect, TLS, timeout).
    #[error("catalog transport failure for {endpoint}: {message}")]
    Transport {
        /// The logical operation that was being performed.
        endpoint: String,
        /// Diagnostic detail from the transport.
        message: String,
    },

    /// The catalog answered with a non-success HTTP status.
    #[error("catalog API rejected {endpoint}: HTTP {status}: {body}")]
    Api {
        /// The logical operation that was being performed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim, for diagnosis.
        body: String,
    },

    /// The catalog executed the request but reported query errors.
    #[error("catalog query failed for {endpoint}: {message}")]
    Query {
        /// The logical operation that was being performed.
        endpoint: String,
        /// Joined error messages reported by the catalog.
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("could not decode catalog response for {endpoint}: {message}")]
    Decode {
        /// The logical operation that was being performed.
        endpoint: String,
        /// Diagnostic detail from the decoder.
        message: String,
    },

    /// A product lookup named an id the catalog does not know.
    #[error("unknown product id: {id}")]
    UnknownProduct {
        /// The requested product id.
        id: String,
    },
}

/// Validation errors for catalog identifier newtypes.
///
/// Identifiers are opaque strings; the only structural requirement is
/// non-emptiness, enforced at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Collection id was empty.
    #[error("invalid collection id: must be non-empty")]
    EmptyCollectionId,

    /// Product id was empty.
    #[error("invalid product id: must be non-empty")]
    EmptyProductId,

    /// Variant id was empty.
    #[error("invalid variant id: must be non-empty")]
    EmptyVariantId,
}

/// Errors in the variant-selection flow on the product detail view.
///
/// Both variants are recoverable: the user corrects the selection and
/// retries the action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Add-to-cart was requested before any variant was chosen.
    #[error("no variant selected")]
    NoVariantSelected,

    /// The requested title names no variant of the loaded product.
    #[error("unknown variant \"{title}\"")]
    UnknownVariant {
        /// The title that matched nothing.
        title: String,
    },
}
