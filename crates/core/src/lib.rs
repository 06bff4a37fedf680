//! Ubermelon Core - Shared domain types.
//!
//! This crate provides the domain model used across the Ubermelon components:
//! - `storefront` - Public-facing melon shop
//! - `integration-tests` - End-to-end HTTP tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! session plumbing. Flat-file loading and request handling live in the
//! storefront crate.
//!
//! # Modules
//!
//! - [`types`] - `MelonId`, `Price`, `Email`, and the `Melon`/`Customer` records
//! - [`cart`] - The per-visitor shopping cart and its quantity rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::Cart;
pub use types::*;
