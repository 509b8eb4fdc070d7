//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `HANA_DATA_DIR` - Directory for file-backed storage (default: .hana-store)
//! - `HANA_CART_KEY` - Storage key holding the cart (default: cart)
//! - `HANA_CURRENCY_LABEL` - Label printed before amounts (default: LE)
//! - `HANA_CHECKOUT_URL` - Checkout redirect target (default: checkout.html)
//! - `HANA_CART_COUNT_SELECTOR` - Item count target (default: .cart-count)
//! - `HANA_CART_TOTAL_SELECTOR` - Cart total target (default: .cart-total)

use std::path::PathBuf;

use hana_store_core::DEFAULT_CURRENCY_LABEL;
use thiserror::Error;

use crate::display::{DEFAULT_COUNT_SELECTOR, DEFAULT_TOTAL_SELECTOR, DisplayTargets};
use crate::storage::validate_key;

/// Default directory for file-backed storage.
pub const DEFAULT_DATA_DIR: &str = ".hana-store";
/// Default key of the cart blob.
pub const DEFAULT_CART_KEY: &str = "cart";
/// Default checkout redirect target.
pub const DEFAULT_CHECKOUT_URL: &str = "checkout.html";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory used by the file-backed storage
    pub data_dir: PathBuf,
    /// Storage key of the cart blob
    pub cart_key: String,
    /// Label printed before every amount
    pub currency_label: String,
    /// Where checkout hands control to
    pub checkout_url: String,
    /// Cart badge and total targets
    pub display: DisplayTargets,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cart_key: DEFAULT_CART_KEY.to_string(),
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            display: DisplayTargets::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but empty, or if the cart
    /// key is not a valid storage key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = PathBuf::from(get_or_default(&lookup, "HANA_DATA_DIR", DEFAULT_DATA_DIR)?);

        let cart_key = get_or_default(&lookup, "HANA_CART_KEY", DEFAULT_CART_KEY)?;
        validate_key(&cart_key)
            .map_err(|e| ConfigError::InvalidEnvVar("HANA_CART_KEY".to_string(), e.to_string()))?;

        let currency_label =
            get_or_default(&lookup, "HANA_CURRENCY_LABEL", DEFAULT_CURRENCY_LABEL)?;
        let checkout_url = get_or_default(&lookup, "HANA_CHECKOUT_URL", DEFAULT_CHECKOUT_URL)?;

        let display = DisplayTargets {
            count_selector: get_or_default(
                &lookup,
                "HANA_CART_COUNT_SELECTOR",
                DEFAULT_COUNT_SELECTOR,
            )?,
            total_selector: get_or_default(
                &lookup,
                "HANA_CART_TOTAL_SELECTOR",
                DEFAULT_TOTAL_SELECTOR,
            )?,
        };

        Ok(Self {
            data_dir,
            cart_key,
            currency_label,
            checkout_url,
            display,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value, rejecting blank values.
fn get_or_default<F>(lookup: &F, key: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Some(value) => Ok(value),
    }
}
