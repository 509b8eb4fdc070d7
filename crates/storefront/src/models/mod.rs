//! Presentation models for the storefront.
//!
//! - [`CartView`] - Cart contents formatted for display
//! - [`Notice`] - User-facing messages raised by cart actions

pub mod cart;
pub mod notice;

pub use cart::{CartItemView, CartView};
pub use notice::{Notice, NoticeLevel};
