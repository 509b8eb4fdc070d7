//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! hana-cli cart add -n Necklace -p 85 -i img/necklace.jpg
//! hana-cli cart show
//! hana-cli cart checkout
//! ```
//!
//! # Environment Variables
//!
//! See `StorefrontConfig` for the `HANA_*` variables; `--data-dir` overrides
//! `HANA_DATA_DIR`.

use std::path::PathBuf;

use hana_store_storefront::config::ConfigError;
use hana_store_storefront::{
    CartDisplay, CartManager, CartSettings, CartStorage, CheckoutOutcome, FileStorage, Notice,
    ShowCart, StorefrontConfig,
};
use tracing::info;

use crate::CartAction;
use crate::display::TracingDisplay;

/// Load the cart from the configured data directory and run one action.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded. Storage failures are
/// logged by the cart manager and do not fail the command.
pub fn run(data_dir: Option<PathBuf>, action: CartAction) -> Result<(), ConfigError> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    info!(data_dir = %config.data_dir.display(), "Using cart storage");

    let storage = FileStorage::new(&config.data_dir);
    let mut manager = CartManager::load(
        storage,
        TracingDisplay::default(),
        CartSettings::from(&config),
    );

    for line in execute(&mut manager, action) {
        info!("{line}");
    }

    Ok(())
}

/// Apply `action` to the cart and describe the result, one line per entry.
pub fn execute<S, D>(manager: &mut CartManager<S, D>, action: CartAction) -> Vec<String>
where
    S: CartStorage,
    D: CartDisplay,
{
    match action {
        CartAction::Add {
            name,
            price,
            image,
            quantity,
        } => {
            manager.add_item(&name, price, &image, quantity);
            vec![Notice::added_to_cart(&name).to_string(), summary(manager)]
        }
        CartAction::Remove { id } => {
            manager.remove_item(&id);
            vec![summary(manager)]
        }
        CartAction::Update { id, quantity } => {
            manager.update_quantity(&id, quantity);
            vec![summary(manager)]
        }
        CartAction::Show => match manager.show_cart() {
            ShowCart::Empty(notice) => vec![notice.to_string()],
            ShowCart::Items(view) => {
                let mut out: Vec<String> = view
                    .items
                    .iter()
                    .map(|item| {
                        format!(
                            "{}  {} x{}  {}  ({})  {}",
                            item.id,
                            item.name,
                            item.quantity,
                            item.price,
                            item.line_price,
                            item.image_url
                        )
                    })
                    .collect();
                out.push(format!(
                    "Total: {} ({} items)",
                    view.subtotal, view.item_count
                ));
                out
            }
        },
        CartAction::Total => vec![manager.formatted_total().to_string()],
        CartAction::Count => vec![manager.item_count().to_string()],
        CartAction::Clear => {
            manager.clear_cart();
            vec!["Cart cleared".to_string()]
        }
        CartAction::Checkout => match manager.checkout() {
            CheckoutOutcome::EmptyCart(notice) => vec![notice.to_string()],
            CheckoutOutcome::Redirect { location } => {
                vec![format!("Continue checkout at {location}")]
            }
        },
    }
}

fn summary<S: CartStorage, D: CartDisplay>(manager: &CartManager<S, D>) -> String {
    format!(
        "{} items, {}",
        manager.item_count(),
        manager.formatted_total()
    )
}
