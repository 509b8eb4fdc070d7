//! Errors raised at the storage boundary.
//!
//! None of these reach the shopper: the cart manager logs them and carries
//! on with its in-memory state.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single storage operation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be used with this storage.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Storage cannot be reached at all.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Cart could not be encoded for writing.
    #[error("Failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Reasons a persisted cart could not be turned back into a cart.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the blob failed.
    #[error("Failed to read cart: {0}")]
    Storage(#[from] StorageError),

    /// The blob is not valid JSON, or its entries are not cart lines.
    #[error("Malformed cart data: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The blob is valid JSON but not an array.
    #[error("Stored cart is not an array (found {0})")]
    NotAnArray(&'static str),
}
