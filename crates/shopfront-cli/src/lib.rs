//! # shopfront-cli — Terminal Front End
//!
//! Thin presentation over the screen cores. Each subcommand builds the
//! catalog client, drives the corresponding screen, and renders its plain
//! values as text (or JSON with `--json`).

use anyhow::Context;
use url::Url;

use shopfront_catalog::{CatalogClient, CatalogConfig};

pub mod home;
pub mod product;

/// Build the catalog client from the environment, with an optional
/// explicit endpoint override.
pub(crate) fn build_client(api_url: Option<&Url>) -> anyhow::Result<CatalogClient> {
    let mut config = CatalogConfig::from_env().context("loading catalog configuration")?;
    if let Some(url) = api_url {
        config.api_url = url.clone();
    }
    CatalogClient::new(config).context("constructing catalog client")
}
