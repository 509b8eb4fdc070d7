//! Cart manager.
//!
//! The manager is the one owner of the shopper's cart for a session. It is
//! built once at start-up with [`CartManager::load`] and handed to whatever
//! handles UI actions. Every mutation is applied in memory, written through
//! to storage before returning, and then pushed to the display targets.
//!
//! Storage problems never reach the caller. A cart that cannot be loaded
//! starts empty; a cart that cannot be saved stays authoritative in memory.

use hana_store_core::{Cart, CartLine, CartLineId, Money};
use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument, warn};

use crate::config::StorefrontConfig;
use crate::display::{CartDisplay, DisplayTargets, NoDisplay};
use crate::models::{CartView, Notice};
use crate::storage::{CartStorage, load_cart, save_cart};

/// Settings the cart manager needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSettings {
    /// Storage key of the cart blob.
    pub storage_key: String,
    /// Label printed before amounts.
    pub currency_label: String,
    /// Checkout redirect target.
    pub checkout_url: String,
    /// Count and total targets.
    pub targets: DisplayTargets,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self::from(&StorefrontConfig::default())
    }
}

impl From<&StorefrontConfig> for CartSettings {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            storage_key: config.cart_key.clone(),
            currency_label: config.currency_label.clone(),
            checkout_url: config.checkout_url.clone(),
            targets: config.display.clone(),
        }
    }
}

/// Result of opening the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowCart {
    /// Nothing to show.
    Empty(Notice),
    /// Lines, subtotal and count, formatted.
    Items(CartView),
}

/// Result of a checkout request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart is empty; nothing happens beyond the notice.
    EmptyCart(Notice),
    /// Hand control to the checkout flow, which reloads the cart from storage.
    Redirect {
        /// Checkout page to navigate to
        location: String,
    },
}

/// Owns the cart for one session.
#[derive(Debug)]
pub struct CartManager<S, D = NoDisplay> {
    cart: Cart,
    storage: S,
    display: D,
    settings: CartSettings,
}

impl<S: CartStorage> CartManager<S, NoDisplay> {
    /// Load the cart with default settings and no display targets.
    pub fn with_storage(storage: S) -> Self {
        Self::load(storage, NoDisplay, CartSettings::default())
    }
}

impl<S: CartStorage, D: CartDisplay> CartManager<S, D> {
    /// Load the persisted cart and refresh the display once.
    ///
    /// A missing, unreadable or corrupt blob yields an empty cart; the
    /// reason is logged.
    pub fn load(storage: S, display: D, settings: CartSettings) -> Self {
        let cart = match load_cart(&storage, &settings.storage_key) {
            Ok(cart) => {
                debug!(
                    key = %settings.storage_key,
                    lines = cart.len(),
                    "Loaded cart from storage"
                );
                cart
            }
            Err(e) => {
                warn!(
                    key = %settings.storage_key,
                    error = %e,
                    "Failed to load cart from storage, starting empty"
                );
                Cart::new()
            }
        };

        let mut manager = Self {
            cart,
            storage,
            display,
            settings,
        };
        manager.refresh_display();
        manager
    }

    /// Add `quantity` units of a product, merging by name.
    ///
    /// An existing line keeps its price and image. A new line takes the
    /// quantity as given, without validation.
    #[instrument(skip(self, image_url))]
    pub fn add_item(
        &mut self,
        name: &str,
        unit_price: Decimal,
        image_url: &str,
        quantity: i64,
    ) -> &[CartLine] {
        let id = self.cart.add(name, unit_price, image_url, quantity);
        debug!(%id, "Cart line added or merged");
        self.commit();
        self.cart.lines()
    }

    /// Add one unit of a product and return the confirmation notice.
    pub fn add_to_cart(&mut self, name: &str, unit_price: Decimal, image_url: &str) -> Notice {
        self.add_item(name, unit_price, image_url, 1);
        Notice::added_to_cart(name)
    }

    /// Remove a line. Unknown ids leave the cart unchanged.
    #[instrument(skip(self, id), fields(id = %id))]
    pub fn remove_item(&mut self, id: &CartLineId) -> &[CartLine] {
        if !self.cart.remove(id) {
            debug!("No cart line with this id");
        }
        self.commit();
        self.cart.lines()
    }

    /// Set a line's quantity; `quantity <= 0` removes the line.
    ///
    /// Unknown ids are ignored and nothing is written.
    #[instrument(skip(self, id), fields(id = %id))]
    pub fn update_quantity(&mut self, id: &CartLineId, quantity: i64) -> &[CartLine] {
        if self.cart.get(id).is_none() {
            debug!("No cart line with this id");
            return self.cart.lines();
        }

        if quantity <= 0 {
            return self.remove_item(id);
        }

        self.cart.update_quantity(id, quantity);
        self.commit();
        self.cart.lines()
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) -> &[CartLine] {
        self.cart.clear();
        self.commit();
        self.cart.lines()
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Total formatted with the configured currency label.
    #[must_use]
    pub fn formatted_total(&self) -> Money {
        Money::new(self.cart.total(), self.settings.currency_label.as_str())
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// The cart itself.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The display this manager refreshes.
    #[must_use]
    pub const fn display(&self) -> &D {
        &self.display
    }

    /// The storage this manager writes to.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &CartSettings {
        &self.settings
    }

    /// Cart contents formatted for display, or the empty-cart notice.
    #[must_use]
    pub fn show_cart(&self) -> ShowCart {
        if self.cart.is_empty() {
            return ShowCart::Empty(Notice::empty_cart());
        }
        ShowCart::Items(CartView::from_cart(&self.cart, &self.settings.currency_label))
    }

    /// Gate checkout on a non-empty cart.
    #[must_use]
    pub fn checkout(&self) -> CheckoutOutcome {
        if self.cart.is_empty() {
            info!("Checkout requested with an empty cart");
            return CheckoutOutcome::EmptyCart(Notice::empty_checkout());
        }

        info!(
            lines = self.cart.len(),
            location = %self.settings.checkout_url,
            "Redirecting to checkout"
        );
        CheckoutOutcome::Redirect {
            location: self.settings.checkout_url.clone(),
        }
    }

    /// Push the current count and total to the display targets.
    ///
    /// Targets that are not present are skipped.
    pub fn refresh_display(&mut self) {
        let count = self.cart.item_count();
        let count_text = count.to_string();
        let targets = &self.settings.targets;

        if self.display.set_text(&targets.count_selector, &count_text) {
            self.display.set_attribute(
                &targets.count_selector,
                "aria-label",
                &format!("{count} items in cart"),
            );
        }

        let total = Money::new(self.cart.total(), self.settings.currency_label.as_str());
        self.display
            .set_text(&targets.total_selector, &total.to_string());
    }

    fn commit(&mut self) {
        self.persist();
        self.refresh_display();
    }

    fn persist(&self) {
        if let Err(e) = save_cart(&self.storage, &self.settings.storage_key, &self.cart) {
            error!(
                key = %self.settings.storage_key,
                error = %e,
                "Failed to save cart to storage"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::display::ElementDisplay;
    use crate::error::StorageError;
    use crate::storage::MemoryStorage;

    #[derive(Debug, Default)]
    struct FailingStorage;

    impl CartStorage for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("offline".to_string()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("offline".to_string()))
        }
    }

    fn price(units: i64) -> Decimal {
        Decimal::new(units, 0)
    }

    fn stored_cart(storage: &MemoryStorage) -> Cart {
        load_cart(storage, "cart").unwrap()
    }

    fn page_display() -> ElementDisplay {
        ElementDisplay::with_targets([".cart-count", ".cart-total"])
    }

    #[test]
    fn test_add_merge_update_clear_flow() {
        let storage = Arc::new(MemoryStorage::new());
        let mut manager = CartManager::with_storage(Arc::clone(&storage));
        assert!(manager.lines().is_empty());

        manager.add_item("Necklace", price(85), "img1", 1);
        assert_eq!(manager.lines().len(), 1);
        assert_eq!(manager.lines()[0].quantity, 1);
        assert_eq!(manager.lines()[0].unit_price, price(85));

        manager.add_item("Necklace", price(85), "img1", 1);
        assert_eq!(manager.lines().len(), 1);
        assert_eq!(manager.lines()[0].quantity, 2);

        manager.add_item("Bracelet", price(45), "img2", 1);
        assert_eq!(manager.lines().len(), 2);
        assert_eq!(manager.total(), price(215));
        assert_eq!(manager.item_count(), 3);

        let necklace = manager.lines()[0].id.clone();
        let lines = manager.update_quantity(&necklace, 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Bracelet");
        assert_eq!(lines[0].quantity, 1);

        manager.clear_cart();
        assert!(manager.lines().is_empty());
        assert!(stored_cart(&storage).is_empty());
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let storage = Arc::new(MemoryStorage::new());
        let mut manager = CartManager::with_storage(Arc::clone(&storage));

        manager.add_item("Necklace", price(85), "img1", 2);
        assert_eq!(&stored_cart(&storage), manager.cart());

        let id = manager.lines()[0].id.clone();
        manager.update_quantity(&id, 5);
        assert_eq!(stored_cart(&storage).lines()[0].quantity, 5);

        manager.add_item("Ring", price(120), "img3", 1);
        manager.remove_item(&id);
        assert_eq!(&stored_cart(&storage), manager.cart());
        assert_eq!(stored_cart(&storage).len(), 1);
    }

    #[test]
    fn test_reload_restores_same_lines() {
        let storage = Arc::new(MemoryStorage::new());
        let mut manager = CartManager::with_storage(Arc::clone(&storage));
        manager.add_item("Necklace", price(85), "img1", 2);
        manager.add_item("Bracelet", Decimal::new(4550, 2), "img2", 1);
        let before = manager.lines().to_vec();
        drop(manager);

        let reloaded = CartManager::with_storage(Arc::clone(&storage));
        assert_eq!(reloaded.lines(), before.as_slice());
    }

    #[test]
    fn test_corrupt_storage_loads_empty() {
        for blob in ["{not json", r#"{"items":[]}"#, "null", r#""cart""#] {
            let storage = MemoryStorage::new();
            storage.write("cart", blob).unwrap();

            let manager = CartManager::with_storage(storage);
            assert!(manager.lines().is_empty(), "blob {blob:?} should load empty");
        }
    }

    #[test]
    fn test_unavailable_storage_keeps_memory_state() {
        let mut manager = CartManager::with_storage(FailingStorage);
        assert!(manager.lines().is_empty());

        manager.add_item("Necklace", price(85), "img1", 1);
        manager.add_item("Necklace", price(85), "img1", 1);

        assert_eq!(manager.item_count(), 2);
        assert_eq!(manager.total(), price(170));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut manager = CartManager::with_storage(MemoryStorage::new());
        manager.add_item("Necklace", price(85), "img1", 1);
        let before = manager.cart().clone();

        let missing = CartLineId::parse("missing").unwrap();
        manager.remove_item(&missing);
        assert_eq!(manager.cart(), &before);
    }

    #[test]
    fn test_update_unknown_id_writes_nothing() {
        let storage = Arc::new(MemoryStorage::new());
        let mut manager = CartManager::with_storage(Arc::clone(&storage));

        let missing = CartLineId::parse("missing").unwrap();
        manager.update_quantity(&missing, 3);
        manager.update_quantity(&missing, 0);

        assert!(storage.is_empty().unwrap());
    }

    #[test]
    fn test_update_negative_removes() {
        let mut manager = CartManager::with_storage(MemoryStorage::new());
        manager.add_item("Necklace", price(85), "img1", 3);
        let id = manager.lines()[0].id.clone();

        manager.update_quantity(&id, -4);
        assert!(manager.lines().is_empty());
    }

    #[test]
    fn test_stored_lines_stay_positive_after_updates() {
        let mut manager = CartManager::with_storage(MemoryStorage::new());
        manager.add_item("A", price(10), "a", 1);
        manager.add_item("B", price(20), "b", 4);
        manager.add_item("C", price(30), "c", 2);

        let ids: Vec<CartLineId> = manager.lines().iter().map(|l| l.id.clone()).collect();
        for (id, quantity) in ids.iter().zip([0, 7, -1]) {
            manager.update_quantity(id, quantity);
        }

        assert_eq!(manager.lines().len(), 1);
        assert!(manager.lines().iter().all(|line| line.quantity >= 1));
        assert_eq!(manager.total(), price(140));
    }

    #[test]
    fn test_display_refreshed_on_load_and_mutation() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut manager = CartManager::with_storage(Arc::clone(&storage));
            manager.add_item("Necklace", price(85), "img1", 2);
        }

        let mut manager =
            CartManager::load(Arc::clone(&storage), page_display(), CartSettings::default());
        assert_eq!(manager.display().text(".cart-count"), Some("2"));
        assert_eq!(manager.display().text(".cart-total"), Some("LE 170.00"));

        manager.add_item("Bracelet", price(45), "img2", 1);
        assert_eq!(manager.display().text(".cart-count"), Some("3"));
        assert_eq!(
            manager.display().attribute(".cart-count", "aria-label"),
            Some("3 items in cart")
        );
        assert_eq!(manager.display().text(".cart-total"), Some("LE 215.00"));

        manager.clear_cart();
        assert_eq!(manager.display().text(".cart-count"), Some("0"));
        assert_eq!(manager.display().text(".cart-total"), Some("LE 0.00"));
    }

    #[test]
    fn test_missing_display_targets_are_skipped() {
        let display = ElementDisplay::with_targets([".cart-total"]);
        let mut manager =
            CartManager::load(MemoryStorage::new(), display, CartSettings::default());

        manager.add_item("Necklace", price(85), "img1", 1);
        assert_eq!(manager.display().text(".cart-total"), Some("LE 85.00"));
        assert_eq!(manager.display().text(".cart-count"), None);
    }

    #[test]
    fn test_custom_settings() {
        let settings = CartSettings {
            storage_key: "basket".to_string(),
            currency_label: "EGP".to_string(),
            checkout_url: "/pay".to_string(),
            targets: DisplayTargets {
                count_selector: "#count".to_string(),
                total_selector: "#total".to_string(),
            },
        };
        let storage = Arc::new(MemoryStorage::new());
        let display = ElementDisplay::with_targets(["#count", "#total"]);
        let mut manager = CartManager::load(Arc::clone(&storage), display, settings);

        manager.add_item("Necklace", price(85), "img1", 1);

        assert!(storage.read("basket").unwrap().is_some());
        assert!(storage.read("cart").unwrap().is_none());
        assert_eq!(manager.display().text("#total"), Some("EGP 85.00"));
        assert_eq!(manager.formatted_total().to_string(), "EGP 85.00");
        assert_eq!(
            manager.checkout(),
            CheckoutOutcome::Redirect {
                location: "/pay".to_string()
            }
        );
    }

    #[test]
    fn test_show_cart() {
        let mut manager = CartManager::with_storage(MemoryStorage::new());
        assert_eq!(manager.show_cart(), ShowCart::Empty(Notice::empty_cart()));

        manager.add_item("Necklace", price(85), "img1", 2);
        let ShowCart::Items(view) = manager.show_cart() else {
            panic!("expected cart items");
        };
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.subtotal, "LE 170.00");
        assert_eq!(view.item_count, 2);
    }

    #[test]
    fn test_checkout_gated_on_non_empty_cart() {
        let mut manager = CartManager::with_storage(MemoryStorage::new());
        assert_eq!(
            manager.checkout(),
            CheckoutOutcome::EmptyCart(Notice::empty_checkout())
        );
        assert!(manager.lines().is_empty());

        manager.add_item("Necklace", price(85), "img1", 1);
        assert_eq!(
            manager.checkout(),
            CheckoutOutcome::Redirect {
                location: "checkout.html".to_string()
            }
        );
    }

    #[test]
    fn test_add_to_cart_notice() {
        let mut manager = CartManager::with_storage(MemoryStorage::new());
        let notice = manager.add_to_cart("Necklace", price(85), "img1");

        assert_eq!(notice, Notice::added_to_cart("Necklace"));
        assert_eq!(manager.item_count(), 1);
    }

    #[test]
    fn test_add_item_accepts_zero_quantity_on_new_line() {
        let mut manager = CartManager::with_storage(MemoryStorage::new());
        manager.add_item("Anklet", price(30), "img", 0);

        assert_eq!(manager.lines().len(), 1);
        assert_eq!(manager.lines()[0].quantity, 0);
        assert_eq!(manager.item_count(), 0);
    }
}
