//! The concrete catalog client.
//!
//! One `reqwest::Client` behind one GraphQL endpoint. Each operation
//! posts a named query document, checks the HTTP status, decodes the
//! envelope, surfaces the GraphQL `errors` array, and maps wire nodes to
//! domain values.
//!
//! Failures are not retried here: the screens' failure semantics are
//! log-and-render-empty, so a retry layer would only delay that outcome.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use shopfront_core::{
    CatalogError, CatalogService, Collection, Product, ProductId, ProductWithVariants,
    VARIANTS_FIRST,
};

use crate::config::CatalogConfig;
use crate::graphql::{
    CollectionsData, GraphQlRequest, GraphQlResponse, ProductData, ProductsData,
    COLLECTIONS_QUERY, PRODUCTS_QUERY, PRODUCT_QUERY,
};

/// Typed client for the storefront catalog API.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection
/// pool across clones. Constructed once by the composition root and
/// passed by reference — never a process-wide global.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    api_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::Transport {
                endpoint: "client_init".into(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            api_url: config.api_url,
        })
    }

    /// Post one GraphQL operation and decode its data payload.
    async fn post_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &'static str,
        variables: serde_json::Value,
    ) -> Result<T, CatalogError> {
        tracing::debug!(%endpoint, "issuing catalog query");

        let req = GraphQlRequest { query, variables };
        let resp = self
            .http
            .post(self.api_url.clone())
            .json(&req)
            .send()
            .await
            .map_err(|e| CatalogError::Transport {
                endpoint: endpoint.into(),
                message: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let envelope: GraphQlResponse<T> =
            resp.json().await.map_err(|e| CatalogError::Decode {
                endpoint: endpoint.into(),
                message: e.to_string(),
            })?;

        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CatalogError::Query {
                endpoint: endpoint.into(),
                message,
            });
        }

        envelope.data.ok_or_else(|| CatalogError::Decode {
            endpoint: endpoint.into(),
            message: "response carried neither data nor errors".into(),
        })
    }
}

impl CatalogService for CatalogClient {
    async fn fetch_collections(&self, first: usize) -> Result<Vec<Collection>, CatalogError> {
        let data: CollectionsData = self
            .post_query(
                "query HomeCollections",
                COLLECTIONS_QUERY,
                serde_json::json!({ "first": first }),
            )
            .await?;

        Ok(data
            .collections
            .edges
            .into_iter()
            .filter_map(|edge| edge.node.into_domain())
            .collect())
    }

    async fn fetch_products(&self, first: usize) -> Result<Vec<Product>, CatalogError> {
        let data: ProductsData = self
            .post_query(
                "query HomeProducts",
                PRODUCTS_QUERY,
                serde_json::json!({ "first": first, "variantsFirst": VARIANTS_FIRST }),
            )
            .await?;

        Ok(data
            .products
            .edges
            .into_iter()
            .filter_map(|edge| edge.node.into_domain())
            .collect())
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<ProductWithVariants, CatalogError> {
        let data: ProductData = self
            .post_query(
                "query ProductDetail",
                PRODUCT_QUERY,
                serde_json::json!({ "id": id.as_str(), "variantsFirst": VARIANTS_FIRST }),
            )
            .await?;

        let node = data.product.ok_or_else(|| CatalogError::UnknownProduct {
            id: id.to_string(),
        })?;

        node.into_detail().ok_or_else(|| CatalogError::Decode {
            endpoint: "query ProductDetail".into(),
            message: format!("product {id} arrived without a usable id"),
        })
    }
}
