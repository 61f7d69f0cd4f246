//! Emporium CLI - shop from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog (requires a running storefront server)
//! emporium products
//! emporium product 1
//!
//! # Manage the local cart
//! emporium cart add 1 --quantity 2
//! emporium cart show
//! emporium cart clear
//! ```
//!
//! # Commands
//!
//! - `products` - List the catalog
//! - `product` - Show one product
//! - `cart` - Show and change the cart persisted under `EMPORIUM_DATA_DIR`

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use emporium_core::ProductId;
use emporium_storefront::cart::CartStore;
use emporium_storefront::storage;

mod client;
mod commands;
mod config;

use client::{ClientError, ProductClient};
use commands::cart::CartAction;
use config::ClientConfig;

#[derive(Parser)]
#[command(name = "emporium")]
#[command(author, version, about = "Emporium shopping client")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every product in the catalog
    Products,
    /// Show a single product
    Product {
        /// Product ID
        id: i32,
    },
    /// Manage the local cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_level.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .with_target(false)
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = ClientConfig::from_env()?;
    let client = ProductClient::new(config.base_url.clone());

    match cli.command {
        Commands::Products => commands::product::list(&client).await?,
        Commands::Product { id } => commands::product::show(&client, ProductId::new(id)).await?,
        Commands::Cart { action } => {
            if !config.context.is_client() {
                tracing::warn!(
                    context = %config.context,
                    "Durable storage unavailable in this context; cart changes will not be saved"
                );
            }
            let mut cart = CartStore::new(storage::for_context(config.context, &config.data_dir));
            cart.restore();
            commands::cart::execute(action, &mut cart, &client).await?;
        }
    }
    Ok(())
}
