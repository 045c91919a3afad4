//! End-to-end screen-flow tests over an in-memory catalog.
//!
//! `FakeCatalog` implements `CatalogService` from fixtures, exercising
//! the screens exactly the way the HTTP client drives them — including
//! failure injection, which wiremock-level tests cover only at the
//! client boundary.

use std::collections::HashMap;

use shopfront_core::{
    CatalogError, CatalogService, Collection, CollectionId, Price, Product, ProductId,
    ProductWithVariants, Variant, VariantId,
};
use shopfront_screens::home::load_home;
use shopfront_screens::product::ProductDetailController;

/// In-memory catalog with optional injected failures.
#[derive(Default)]
struct FakeCatalog {
    collections: Vec<Collection>,
    products: Vec<Product>,
    details: HashMap<ProductId, ProductWithVariants>,
    fail_collections: bool,
    fail_products: bool,
}

impl CatalogService for FakeCatalog {
    async fn fetch_collections(&self, first: usize) -> Result<Vec<Collection>, CatalogError> {
        if self.fail_collections {
            return Err(CatalogError::Transport {
                endpoint: "query HomeCollections".to_string(),
                message: "injected".to_string(),
            });
        }
        Ok(self.collections.iter().take(first).cloned().collect())
    }

    async fn fetch_products(&self, first: usize) -> Result<Vec<Product>, CatalogError> {
        if self.fail_products {
            return Err(CatalogError::Transport {
                endpoint: "query HomeProducts".to_string(),
                message: "injected".to_string(),
            });
        }
        Ok(self.products.iter().take(first).cloned().collect())
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<ProductWithVariants, CatalogError> {
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownProduct { id: id.to_string() })
    }
}

fn collection(n: u32, title: &str) -> Collection {
    Collection {
        id: CollectionId::new(format!("gid://shopify/Collection/{n}")).unwrap(),
        handle: None,
        title: title.to_string(),
        description: String::new(),
        image_url: Some(format!("https://cdn.example/c{n}.png")),
    }
}

fn product(n: u32, title: &str, displayable: bool) -> Product {
    Product {
        id: ProductId::new(format!("gid://shopify/Product/{n}")).unwrap(),
        title: title.to_string(),
        description: String::new(),
        featured_image_url: displayable.then(|| format!("https://cdn.example/p{n}.png")),
        price: Some(Price {
            amount: 10.0 + f64::from(n),
            currency_code: "USD".to_string(),
        }),
    }
}

fn usd(amount: f64) -> Option<Price> {
    Some(Price {
        amount,
        currency_code: "USD".to_string(),
    })
}

fn variant(n: u32, title: &str, amount: f64) -> Variant {
    Variant {
        id: VariantId::new(format!("gid://shopify/ProductVariant/{n}")).unwrap(),
        title: title.to_string(),
        image_url: None,
        price: usd(amount),
    }
}

fn with_variants(product: Product, variants: Vec<Variant>) -> ProductWithVariants {
    ProductWithVariants { product, variants }
}

// ── Home flow ────────────────────────────────────────────────────────

#[tokio::test]
async fn home_composes_two_windows_of_two() {
    let catalog = FakeCatalog {
        collections: vec![collection(1, "Men"), collection(2, "Women")],
        products: vec![
            product(1, "P1", true),
            product(2, "P2", true),
            product(3, "P3", true),
            product(4, "P4", true),
        ],
        ..FakeCatalog::default()
    };

    let view = load_home(&catalog).await;
    assert_eq!(view.sections.len(), 2);
    assert_eq!(view.sections[0].collection.title, "Men");
    let window: Vec<&str> = view.sections[0]
        .products
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(window, vec!["P1", "P2"]);
    let window: Vec<&str> = view.sections[1]
        .products
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(window, vec!["P3", "P4"]);
}

#[tokio::test]
async fn home_excludes_undisplayable_products_from_all_windows() {
    let catalog = FakeCatalog {
        collections: vec![collection(1, "Men"), collection(2, "Women")],
        products: vec![
            product(1, "P1", true),
            product(2, "P2", false),
            product(3, "P3", true),
            product(4, "P4", true),
        ],
        ..FakeCatalog::default()
    };

    let view = load_home(&catalog).await;
    let all_titles: Vec<&str> = view
        .sections
        .iter()
        .flat_map(|s| s.products.iter().map(|p| p.title.as_str()))
        .collect();
    assert!(!all_titles.contains(&"P2"));
    assert_eq!(all_titles, vec!["P1", "P3", "P4"]);
}

#[tokio::test]
async fn home_renders_empty_when_either_fetch_fails() {
    let catalog = FakeCatalog {
        collections: vec![collection(1, "Men")],
        products: vec![product(1, "P1", true)],
        fail_products: true,
        ..FakeCatalog::default()
    };
    let view = load_home(&catalog).await;
    assert!(view.is_empty());

    let catalog = FakeCatalog {
        collections: vec![collection(1, "Men")],
        products: vec![product(1, "P1", true)],
        fail_collections: true,
        ..FakeCatalog::default()
    };
    let view = load_home(&catalog).await;
    assert!(view.is_empty());
}

// ── Detail flow ──────────────────────────────────────────────────────

#[tokio::test]
async fn detail_flow_select_then_add_to_cart() {
    let id = ProductId::new("gid://shopify/Product/1").unwrap();
    let mut details = HashMap::new();
    details.insert(
        id.clone(),
        with_variants(
            product(1, "Tee", true),
            vec![variant(1, "Small", 10.0), variant(2, "Large", 15.0)],
        ),
    );
    let catalog = FakeCatalog {
        details,
        ..FakeCatalog::default()
    };

    let mut controller = ProductDetailController::new();
    controller.load(&catalog, id).await;

    assert_eq!(controller.detail().unwrap().variants.len(), 2);
    controller.select_variant("Large").unwrap();
    let intent = controller.add_to_cart().unwrap();
    assert_eq!(intent.variant_title, "Large");
    assert_eq!(intent.notification(), "Added \"Large\" Tee to cart");
}

#[tokio::test]
async fn navigating_to_another_product_resets_selection() {
    let id_a = ProductId::new("gid://shopify/Product/A").unwrap();
    let id_b = ProductId::new("gid://shopify/Product/B").unwrap();
    let mut details = HashMap::new();
    details.insert(
        id_a.clone(),
        with_variants(product(1, "A", true), vec![variant(1, "Small", 10.0)]),
    );
    details.insert(
        id_b.clone(),
        with_variants(product(2, "B", true), vec![variant(2, "Large", 15.0)]),
    );
    let catalog = FakeCatalog {
        details,
        ..FakeCatalog::default()
    };

    let mut controller = ProductDetailController::new();
    controller.load(&catalog, id_a).await;
    controller.select_variant("Small").unwrap();

    controller.load(&catalog, id_b).await;
    assert_eq!(controller.detail().unwrap().product.title, "B");
    // Selection does not carry over across products.
    assert!(controller.add_to_cart().is_err());
}

#[tokio::test]
async fn unknown_product_leaves_detail_blank() {
    let catalog = FakeCatalog::default();
    let mut controller = ProductDetailController::new();
    controller
        .load(&catalog, ProductId::new("gid://shopify/Product/404").unwrap())
        .await;
    assert!(controller.detail().is_none());
}
