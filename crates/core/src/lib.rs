//! Hana Store Core - Shared cart types library.
//!
//! This crate provides the types shared by all Hana Store components:
//! - `storefront` - Cart manager with persistence and display refresh
//! - `cli` - Command-line front end driving the cart manager
//!
//! # Architecture
//!
//! The core crate contains only types and pure cart logic - no I/O, no
//! storage access, no logging. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Line identifiers, money formatting, cart lines and the cart itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
