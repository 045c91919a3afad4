//! GraphQL documents and wire types for the storefront API.
//!
//! The storefront speaks the Shopify storefront schema: every list is a
//! connection of edges, every edge wraps a node, and money amounts arrive
//! as decimal strings. The wire types here mirror that shape with
//! `#[serde(default)]` resilience — the live API may add fields or omit
//! optional ones, and neither should fail a decode — and convert into the
//! domain model at the mapping boundary, dropping malformed nodes rather
//! than propagating them.

use serde::{Deserialize, Serialize};

use shopfront_core::{
    Collection, CollectionId, Price, Product, ProductId, ProductWithVariants, Variant, VariantId,
};

// ── Query documents ──────────────────────────────────────────────────

/// Collections listed on the home screen.
pub(crate) const COLLECTIONS_QUERY: &str = "\
query HomeCollections($first: Int!) {
  collections(first: $first) {
    edges {
      node {
        id
        handle
        title
        description
        image {
          id
          url
        }
      }
    }
  }
}";

/// Products listed on the home screen, with first-variant prices.
pub(crate) const PRODUCTS_QUERY: &str = "\
query HomeProducts($first: Int!, $variantsFirst: Int!) {
  products(first: $first) {
    edges {
      node {
        id
        title
        description
        featuredImage {
          id
          url
        }
        variants(first: $variantsFirst) {
          edges {
            node {
              price {
                amount
                currencyCode
              }
            }
          }
        }
      }
    }
  }
}";

/// One product with its full variant nodes, for the detail screen.
pub(crate) const PRODUCT_QUERY: &str = "\
query ProductDetail($id: ID!, $variantsFirst: Int!) {
  product(id: $id) {
    id
    title
    description
    featuredImage {
      id
      url
    }
    variants(first: $variantsFirst) {
      edges {
        node {
          id
          title
          image {
            url
          }
          price {
            amount
            currencyCode
          }
        }
      }
    }
  }
}";

// ── Envelope types ───────────────────────────────────────────────────

/// A GraphQL request body.
#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// A GraphQL response envelope: data, or errors, or (degenerately) both.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

/// A connection of edges, per the storefront schema.
#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

/// One edge wrapping a node.
#[derive(Debug, Deserialize)]
pub(crate) struct Edge<T> {
    pub node: T,
}

// ── Node types ───────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageNode {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CollectionNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<ImageNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PriceNode {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub currency_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VariantNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<ImageNode>,
    #[serde(default)]
    pub price: Option<PriceNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub featured_image: Option<ImageNode>,
    #[serde(default)]
    pub variants: Connection<VariantNode>,
}

// ── Operation data shapes ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionsData {
    #[serde(default)]
    pub collections: Connection<CollectionNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductsData {
    #[serde(default)]
    pub products: Connection<ProductNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductData {
    #[serde(default)]
    pub product: Option<ProductNode>,
}

// ── Wire → domain mapping ────────────────────────────────────────────
//
// Mapping drops malformed nodes (empty ids) and blanks malformed prices.
// Degradation, never failure: a bad catalog entry costs itself, not the
// screen.

fn image_url(image: Option<ImageNode>) -> Option<String> {
    image.map(|i| i.url).filter(|url| !url.is_empty())
}

impl PriceNode {
    pub(crate) fn into_domain(self) -> Option<Price> {
        let amount = self.amount.trim().parse::<f64>().ok()?;
        Some(Price {
            amount,
            currency_code: self.currency_code,
        })
    }
}

impl CollectionNode {
    pub(crate) fn into_domain(self) -> Option<Collection> {
        let id = CollectionId::new(self.id).ok()?;
        Some(Collection {
            id,
            handle: self.handle.filter(|h| !h.is_empty()),
            title: self.title,
            description: self.description,
            image_url: image_url(self.image),
        })
    }
}

impl VariantNode {
    pub(crate) fn into_domain(self) -> Option<Variant> {
        let id = VariantId::new(self.id).ok()?;
        Some(Variant {
            id,
            title: self.title,
            image_url: image_url(self.image),
            price: self.price.and_then(PriceNode::into_domain),
        })
    }
}

impl ProductNode {
    /// Map a listing node: the price is the first variant edge's price,
    /// matching what the listing query fetches (price only, no ids).
    pub(crate) fn into_domain(self) -> Option<Product> {
        let id = ProductId::new(self.id).ok()?;
        let price = self
            .variants
            .edges
            .into_iter()
            .next()
            .and_then(|edge| edge.node.price)
            .and_then(PriceNode::into_domain);
        Some(Product {
            id,
            title: self.title,
            description: self.description,
            featured_image_url: image_url(self.featured_image),
            price,
        })
    }

    /// Map a detail node: full variant list plus the listing price. The
    /// listing price is still taken from the first variant *edge* so that
    /// a variant dropped for a malformed id cannot shift the displayed
    /// product price.
    pub(crate) fn into_detail(self) -> Option<ProductWithVariants> {
        let id = ProductId::new(self.id).ok()?;
        let mut first_edge_price: Option<Price> = None;
        let mut variants = Vec::with_capacity(self.variants.edges.len());
        for (index, edge) in self.variants.edges.into_iter().enumerate() {
            if index == 0 {
                first_edge_price = edge
                    .node
                    .price
                    .as_ref()
                    .and_then(|p| {
                        p.amount.trim().parse::<f64>().ok().map(|amount| Price {
                            amount,
                            currency_code: p.currency_code.clone(),
                        })
                    });
            }
            if let Some(variant) = edge.node.into_domain() {
                variants.push(variant);
            }
        }
        Some(ProductWithVariants {
            product: Product {
                id,
                title: self.title,
                description: self.description,
                featured_image_url: image_url(self.featured_image),
                price: first_edge_price,
            },
            variants,
        })
    }
}
