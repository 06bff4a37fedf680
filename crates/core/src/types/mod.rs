//! Core types for Ubermelon.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod customer;
pub mod email;
pub mod id;
pub mod melon;
pub mod price;

pub use customer::Customer;
pub use email::{Email, EmailError};
pub use id::MelonId;
pub use melon::Melon;
pub use price::{Price, PriceError};
