//! # shopfront CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! This binary is the composition root: it constructs the catalog client
//! from configuration and hands it to the screen cores — the client is
//! never a process-wide global.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shopfront_cli::home::{run_home, HomeArgs};
use shopfront_cli::product::{run_product, ProductArgs};

/// shopfront — browse the mock.shop catalog from the terminal.
#[derive(Parser, Debug)]
#[command(name = "shopfront", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the home screen: collections with their product windows.
    Home(HomeArgs),

    /// Render a product detail view; optionally select a variant and add
    /// it to the cart.
    Product(ProductArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Home(args) => run_home(&args).await,
        Commands::Product(args) => run_product(&args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
