//! Cart lines and the cart they belong to.
//!
//! A [`Cart`] is an insertion-ordered list of [`CartLine`]s with at most one
//! line per product name. Adding a product that is already present merges
//! into the existing line by bumping its quantity; the price and image
//! captured when the line was first added are kept.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::CartLineId;

/// One product entry in the cart.
///
/// Field names on the wire (`price`, `image`) match the blob the browser
/// storefront keeps in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Line identifier, generated on insertion.
    pub id: CartLineId,
    /// Product display name. Unique within a cart.
    pub name: String,
    /// Unit price captured when the line was added.
    ///
    /// Written as a JSON number; strings are accepted on read.
    #[serde(
        rename = "price",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub unit_price: Decimal,
    /// Product image reference, display only.
    #[serde(rename = "image")]
    pub image_url: String,
    /// Number of units.
    pub quantity: i64,
}

impl CartLine {
    /// Price of the whole line (`unit_price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Outcome of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The line now holds the requested quantity.
    Updated,
    /// The requested quantity was not positive, so the line was removed.
    Removed,
    /// No line has the given id. The cart is unchanged.
    NotFound,
}

/// The shopper's in-progress selection.
///
/// ## Examples
///
/// ```
/// use hana_store_core::Cart;
/// use rust_decimal::Decimal;
///
/// let mut cart = Cart::new();
/// cart.add("Necklace", Decimal::new(85, 0), "img1", 1);
/// cart.add("Necklace", Decimal::new(85, 0), "img1", 1);
/// cart.add("Bracelet", Decimal::new(45, 0), "img2", 1);
///
/// assert_eq!(cart.len(), 2);
/// assert_eq!(cart.item_count(), 3);
/// assert_eq!(cart.total(), Decimal::new(215, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of a product.
    ///
    /// If a line with the same `name` exists its quantity is incremented and
    /// its price and image are left untouched. Otherwise a new line is
    /// appended with a fresh id. The quantity of a new line is taken as given.
    ///
    /// Returns the id of the line that received the units.
    pub fn add(
        &mut self,
        name: &str,
        unit_price: Decimal,
        image_url: &str,
        quantity: i64,
    ) -> CartLineId {
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == name) {
            line.quantity = line.quantity.saturating_add(quantity);
            return line.id.clone();
        }

        let id = self.fresh_id();
        self.lines.push(CartLine {
            id: id.clone(),
            name: name.to_owned(),
            unit_price,
            image_url: image_url.to_owned(),
            quantity,
        });
        id
    }

    /// Remove the line with the given id.
    ///
    /// Returns `false` (and leaves the cart unchanged) if no such line exists.
    pub fn remove(&mut self, id: &CartLineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.id != id);
        self.lines.len() != before
    }

    /// Set the quantity of a line, removing it when `quantity <= 0`.
    pub fn update_quantity(&mut self, id: &CartLineId, quantity: i64) -> QuantityUpdate {
        let Some(line) = self.lines.iter_mut().find(|line| &line.id == id) else {
            return QuantityUpdate::NotFound;
        };

        if quantity <= 0 {
            self.remove(id);
            QuantityUpdate::Removed
        } else {
            line.quantity = quantity;
            QuantityUpdate::Updated
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.line_total()))
    }

    /// Total number of units (not lines) in the cart.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by id.
    #[must_use]
    pub fn get(&self, id: &CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Look up a line by product name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn fresh_id(&self) -> CartLineId {
        loop {
            let id = CartLineId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// Builds a cart from stored lines, merging any lines that share a name
/// into the first one.
impl From<Vec<CartLine>> for Cart {
    fn from(stored: Vec<CartLine>) -> Self {
        let mut lines: Vec<CartLine> = Vec::with_capacity(stored.len());
        for line in stored {
            match lines.iter_mut().find(|existing| existing.name == line.name) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => lines.push(line),
            }
        }
        Self { lines }
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
