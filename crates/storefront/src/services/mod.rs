//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `cart` - Cart manager: mutations, write-through persistence, display
//!   refresh, cart view and checkout gate

pub mod cart;

pub use cart::{CartManager, CartSettings, CheckoutOutcome, ShowCart};
