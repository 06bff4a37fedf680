//! Data models for the storefront.

pub mod session;

pub use session::session_keys;
