//! Integration tests for Hana Store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hana-store-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart manager against file-backed storage across reloads
//! - `cart_properties` - Merge, quantity, removal and total properties over operation sequences
//!
//! Each test that needs storage gets its own temporary data directory from
//! [`TestContext`], so tests can run in parallel.

use std::path::Path;

use hana_store_storefront::{
    CartManager, CartSettings, ElementDisplay, FileStorage, StorefrontConfig,
};
use tempfile::TempDir;

/// A temporary data directory standing in for the browser's local storage.
pub struct TestContext {
    dir: TempDir,
    pub config: StorefrontConfig,
}

impl TestContext {
    /// Create a context with default settings and a fresh data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        Self { dir, config }
    }

    /// Data directory of this context.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Simulate a page load: a fresh manager over the same storage, with a
    /// page carrying both the count badge and the total.
    #[must_use]
    pub fn load_page(&self) -> CartManager<FileStorage, ElementDisplay> {
        let display = ElementDisplay::with_targets([
            self.config.display.count_selector.as_str(),
            self.config.display.total_selector.as_str(),
        ]);
        CartManager::load(
            FileStorage::new(self.data_dir()),
            display,
            CartSettings::from(&self.config),
        )
    }

    /// Raw contents of the persisted cart blob, if any.
    ///
    /// # Panics
    ///
    /// Panics if the file exists but cannot be read.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn stored_blob(&self) -> Option<String> {
        let path = self
            .data_dir()
            .join(format!("{}.json", self.config.cart_key));
        path.exists()
            .then(|| std::fs::read_to_string(&path).expect("Failed to read cart blob"))
    }

    /// Overwrite the persisted cart blob.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[allow(clippy::expect_used)]
    pub fn write_blob(&self, contents: &str) {
        let path = self
            .data_dir()
            .join(format!("{}.json", self.config.cart_key));
        std::fs::write(path, contents).expect("Failed to write cart blob");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
