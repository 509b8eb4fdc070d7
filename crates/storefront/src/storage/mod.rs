//! Local key-value storage for the persisted cart.
//!
//! The cart is stored as one JSON blob under a fixed key, the same shape the
//! browser storefront keeps in `localStorage`. Implementations only move
//! strings around; encoding and decoding the cart happens in [`load_cart`]
//! and [`save_cart`].
//!
//! # Backends
//!
//! - [`MemoryStorage`] - Process-local map, for tests and ephemeral sessions
//! - [`FileStorage`] - One file per key inside a data directory

use std::fmt::Debug;
use std::sync::Arc;

use hana_store_core::Cart;
use serde_json::Value;

use crate::error::{LoadError, StorageError};

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Maximum length of a storage key.
pub const MAX_KEY_LENGTH: usize = 128;

/// A string-keyed blob store.
///
/// All methods take `&self`; implementations use interior mutability.
pub trait CartStorage: Send + Sync + Debug {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`.
    ///
    /// Returns `Ok(())` even if the key did not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the storage cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: CartStorage + ?Sized> CartStorage for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Check that `key` is usable by every backend.
///
/// Keys are 1-128 characters of ASCII alphanumerics, `-`, `_` and `.`, and
/// may not start with a dot.
///
/// # Errors
///
/// Returns `StorageError::InvalidKey` otherwise.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key.len() <= MAX_KEY_LENGTH
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Load the cart stored under `key`.
///
/// A missing or empty blob is an empty cart.
///
/// # Errors
///
/// Returns `LoadError` if the storage cannot be read, the blob is not JSON,
/// the JSON is not an array, or an entry is not a cart line.
pub fn load_cart<S: CartStorage + ?Sized>(storage: &S, key: &str) -> Result<Cart, LoadError> {
    let Some(raw) = storage.read(key)? else {
        return Ok(Cart::new());
    };

    if raw.trim().is_empty() {
        return Ok(Cart::new());
    }

    let value: Value = serde_json::from_str(&raw).map_err(LoadError::Malformed)?;
    if !value.is_array() {
        return Err(LoadError::NotAnArray(json_kind(&value)));
    }

    serde_json::from_value(value).map_err(LoadError::Malformed)
}

/// Write the full cart under `key`.
///
/// # Errors
///
/// Returns `StorageError` if the cart cannot be encoded or written.
pub fn save_cart<S: CartStorage + ?Sized>(
    storage: &S,
    key: &str,
    cart: &Cart,
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(cart)?;
    storage.write(key, &encoded)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
