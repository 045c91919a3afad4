//! The `product` subcommand: render one product's detail view and walk
//! the selection / add-to-cart flow.

use anyhow::Context;
use clap::Args;
use url::Url;

use shopfront_core::ProductId;
use shopfront_screens::product::{ProductDetailController, SELECT_VARIANT_PROMPT};

/// Arguments for the `product` subcommand.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Product id (e.g. gid://shopify/Product/7982853619734).
    pub id: String,

    /// Select this variant title after the product loads.
    #[arg(long)]
    pub select: Option<String>,

    /// Attempt add-to-cart after loading (and selecting, if requested).
    #[arg(long)]
    pub add_to_cart: bool,

    /// Catalog endpoint override (default from SHOPFRONT_API_URL or mock.shop).
    #[arg(long)]
    pub api_url: Option<Url>,

    /// Emit the loaded detail as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Load the product, apply the requested selection, and print outcomes.
pub async fn run_product(args: &ProductArgs) -> anyhow::Result<()> {
    let catalog = crate::build_client(args.api_url.as_ref())?;
    let id = ProductId::new(args.id.clone()).context("invalid product id")?;

    let mut controller = ProductDetailController::new();
    controller.load(&catalog, id).await;

    match controller.detail() {
        Some(detail) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(detail).context("serializing product detail")?
                );
            } else {
                println!("{}", detail.product.title);
                if let Some(price) = &detail.product.price {
                    println!("{price}");
                }
                if !detail.product.description.is_empty() {
                    println!("{}", detail.product.description);
                }
                for variant in &detail.variants {
                    let price = variant
                        .price
                        .as_ref()
                        .map(|p| p.to_string())
                        .unwrap_or_default();
                    println!("  [{}]  {}", variant.title, price);
                }
            }
        }
        // Catalog failure or unknown id: the view stays blank.
        None => println!("(product unavailable)"),
    }

    if let Some(title) = &args.select {
        match controller.select_variant(title) {
            Ok(()) => println!("Selected \"{title}\""),
            Err(e) => println!("{e}"),
        }
    }

    if args.add_to_cart {
        match controller.add_to_cart() {
            Ok(intent) => println!("{}", intent.notification()),
            Err(_) => println!("{SELECT_VARIANT_PROMPT}"),
        }
    }

    Ok(())
}
