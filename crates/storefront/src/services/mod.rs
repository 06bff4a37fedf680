//! Domain services for the storefront.
//!
//! These compose the read-only stores with the visitor's session: the cart
//! service keeps the melon-id/quantity mapping in the session and prices it
//! against the catalog, and the auth service checks login credentials against
//! the customer store.

pub mod auth;
pub mod cart;

pub use auth::{AuthError, authenticate};
pub use cart::{CartError, CartLine, CartView, add_to_cart, view_cart};
