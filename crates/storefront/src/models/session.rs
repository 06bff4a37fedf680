//! Session-related types.
//!
//! The session holds exactly two pieces of state, kept under separate keys so
//! the cart and the login identity can be set, read, and cleared
//! independently:
//!
//! - the cart, a [`ubermelon_core::Cart`] mapping melon id to quantity
//! - the logged-in customer's email, absent for anonymous visitors

/// Session keys for visitor state.
pub mod session_keys {
    /// Key for the visitor's cart mapping.
    pub const CART: &str = "cart";

    /// Key for the authenticated customer's email.
    pub const LOGGED_IN_CUSTOMER_EMAIL: &str = "logged_in_customer_email";
}
