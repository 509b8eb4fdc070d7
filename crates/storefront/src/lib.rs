//! Hana Store Storefront - Cart manager and its collaborators.
//!
//! The storefront owns the shopper's cart for the lifetime of a session:
//! it loads the cart from local storage once, applies the mutations
//! triggered by the UI, writes every change straight back to storage and
//! refreshes the cart badge and total shown on the page.
//!
//! # Architecture
//!
//! - [`services::CartManager`] - The explicit context object owning the cart
//! - [`storage`] - Key-value blob storage (`CartStorage`) with in-memory and
//!   file-backed implementations
//! - [`display`] - Display targets updated after each mutation
//! - [`models`] - Presentation data (`CartView`) and user-facing notices
//! - [`config`] - Settings loaded from environment variables
//!
//! Product catalog, authentication and orders live in an external backend
//! and are not handled here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use config::StorefrontConfig;
pub use display::{CartDisplay, DisplayTargets, ElementDisplay, NoDisplay};
pub use error::{LoadError, StorageError};
pub use models::{CartItemView, CartView, Notice, NoticeLevel};
pub use services::{CartManager, CartSettings, CheckoutOutcome, ShowCart};
pub use storage::{CartStorage, FileStorage, MemoryStorage};
