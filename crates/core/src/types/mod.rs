//! Core types for Hana Store.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod cart;
pub mod id;
pub mod price;

pub use cart::{Cart, CartLine, QuantityUpdate};
pub use id::{CartLineId, CartLineIdError};
pub use price::{DEFAULT_CURRENCY_LABEL, Money, PriceError, parse_price};
