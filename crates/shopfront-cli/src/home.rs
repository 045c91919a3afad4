//! The `home` subcommand: render the composed home screen.

use anyhow::Context;
use clap::Args;
use url::Url;

use shopfront_screens::home::{load_home, HERO_IMAGE_URL};

/// Arguments for the `home` subcommand.
#[derive(Args, Debug)]
pub struct HomeArgs {
    /// Catalog endpoint override (default from SHOPFRONT_API_URL or mock.shop).
    #[arg(long)]
    pub api_url: Option<Url>,

    /// Emit the composed view as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Load the home composition and print it.
pub async fn run_home(args: &HomeArgs) -> anyhow::Result<()> {
    let catalog = crate::build_client(args.api_url.as_ref())?;
    let view = load_home(&catalog).await;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("serializing home view")?
        );
        return Ok(());
    }

    println!("[hero] {HERO_IMAGE_URL}");
    for section in &view.sections {
        println!();
        println!("== {} ==", section.collection.title);
        if !section.collection.description.is_empty() {
            println!("{}", section.collection.description);
        }
        for product in &section.products {
            let price = product
                .price
                .as_ref()
                .map(|p| p.to_string())
                .unwrap_or_default();
            println!("  - {}  {}", product.title, price);
        }
    }

    Ok(())
}
