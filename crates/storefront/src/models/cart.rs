//! Cart display data.

use hana_store_core::{Cart, CartLine, Money};
use serde::Serialize;

/// One cart line formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub quantity: i64,
    pub price: String,
    pub line_price: String,
}

/// Cart contents formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: i64,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty(currency_label: &str) -> Self {
        Self {
            items: Vec::new(),
            subtotal: Money::new(rust_decimal::Decimal::ZERO, currency_label).to_string(),
            item_count: 0,
        }
    }

    /// Format `cart` using `currency_label` for every amount.
    #[must_use]
    pub fn from_cart(cart: &Cart, currency_label: &str) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView::from_line(line, currency_label))
                .collect(),
            subtotal: Money::new(cart.total(), currency_label).to_string(),
            item_count: cart.item_count(),
        }
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartItemView {
    /// Format a single line.
    #[must_use]
    pub fn from_line(line: &CartLine, currency_label: &str) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            image_url: line.image_url.clone(),
            quantity: line.quantity,
            price: Money::new(line.unit_price, currency_label).to_string(),
            line_price: Money::new(line.line_total(), currency_label).to_string(),
        }
    }
}
