//! Hana Store CLI - Cart management tools.
//!
//! Each invocation behaves like one page load: the cart is loaded from the
//! data directory, the requested action runs, and every change is written
//! straight back.
//!
//! # Usage
//!
//! ```bash
//! # Add a product (merges with an existing line of the same name)
//! hana-cli cart add --name Necklace --price 85 --image img/necklace.jpg
//!
//! # Change or remove a line
//! hana-cli cart update k3j9x0a1b 3
//! hana-cli cart remove k3j9x0a1b
//!
//! # Inspect the cart
//! hana-cli cart show
//! hana-cli cart total
//!
//! # Start checkout
//! hana-cli cart checkout
//! ```
//!
//! # Commands
//!
//! - `cart` - Add, update, remove, show, clear and check out

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hana_store_core::{CartLineId, parse_price};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "hana-cli")]
#[command(author, version, about = "Hana Store CLI tools")]
struct Cli {
    /// Directory holding the persisted cart (overrides `HANA_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
pub enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product display name
        #[arg(short, long)]
        name: String,

        /// Unit price (e.g. 85 or 12.50)
        #[arg(short, long, value_parser = parse_price)]
        price: Decimal,

        /// Product image reference
        #[arg(short, long, default_value = "")]
        image: String,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line from the cart
    Remove {
        /// Line id (see `cart show`)
        id: CartLineId,
    },
    /// Set the quantity of a line (0 or less removes it)
    Update {
        /// Line id (see `cart show`)
        id: CartLineId,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Show the cart contents
    Show,
    /// Show the cart total
    Total,
    /// Show the number of units in the cart
    Count,
    /// Empty the cart
    Clear,
    /// Proceed to checkout
    Checkout,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hana_store_cli=info,hana_store_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => commands::cart::run(cli.data_dir, action)?,
    }
    Ok(())
}
