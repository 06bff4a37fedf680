//! Session cart operations.
//!
//! The cart lives in the visitor's session under [`session_keys::CART`].
//! Adding never touches the catalog; a bogus or stale id only surfaces when
//! the cart is priced at view time, and then it fails the whole view rather
//! than silently skipping the row.
//!
//! Concurrent requests from the same visitor are not synchronized here: two
//! racing adds read-modify-write the session value with last-write-wins
//! semantics, which is what the session store gives every other session value
//! too.

use thiserror::Error;
use tower_sessions::Session;

use ubermelon_core::{Cart, Melon, MelonId, Price};

use crate::models::session_keys;
use crate::store::{CatalogStore, NotFoundError};

/// Failure while reading or pricing the session cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// The session has no cart key at all.
    ///
    /// Distinct from a present-but-empty cart: the web layer redirects with a
    /// warning instead of rendering a zero-line table.
    #[error("no cart in session")]
    Empty,

    /// A cart entry references an id the catalog does not have.
    #[error(transparent)]
    UnknownMelon(#[from] NotFoundError),

    /// The session store failed to read or write the cart value.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// One priced cart row: the melon, how many, and quantity x unit price.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub melon: Melon,
    pub quantity: u32,
    pub line_total: Price,
}

/// The fully priced cart, rows in melon-id order.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub order_total: Price,
}

/// Add one unit of a melon to the session cart, returning the new quantity.
///
/// Creates the cart in the session if this is the visitor's first add. The id
/// is not validated against the catalog here.
///
/// # Errors
///
/// Returns [`CartError::Session`] if the session value cannot be read or
/// written.
pub async fn add_to_cart(session: &Session, id: MelonId) -> Result<u32, CartError> {
    let mut cart: Cart = session.get(session_keys::CART).await?.unwrap_or_default();
    let quantity = cart.add(id);
    session.insert(session_keys::CART, &cart).await?;

    tracing::debug!(melon_id = %id, quantity, "added melon to cart");
    Ok(quantity)
}

/// Price the session cart against the catalog.
///
/// # Errors
///
/// - [`CartError::Empty`] if the session has no cart key.
/// - [`CartError::UnknownMelon`] if any cart entry is missing from the
///   catalog; the whole view fails, no partial result.
/// - [`CartError::Session`] if the session value cannot be read.
pub async fn view_cart(session: &Session, catalog: &CatalogStore) -> Result<CartView, CartError> {
    let Some(cart) = session.get::<Cart>(session_keys::CART).await? else {
        return Err(CartError::Empty);
    };

    let mut lines = Vec::with_capacity(cart.len());
    let mut order_total = Price::ZERO;

    for (id, quantity) in cart.iter() {
        let melon = catalog.get(id)?;
        let line_total = melon.price * quantity;
        order_total = order_total + line_total;
        lines.push(CartLine {
            melon: melon.clone(),
            quantity,
            line_total,
        });
    }

    Ok(CartView { lines, order_total })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use tempfile::NamedTempFile;
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn catalog() -> (NamedTempFile, CatalogStore) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"14|Ali Baba Watermelon|2.50|/img/ali-baba.png\n\
              21|Chris Cross Watermelon|2.50|/img/chris-cross.png\n",
        )
        .unwrap();
        let store = CatalogStore::load(file.path()).unwrap();
        (file, store)
    }

    #[tokio::test]
    async fn test_add_twice_accumulates() {
        let session = session();

        assert_eq!(add_to_cart(&session, MelonId::new(14)).await.unwrap(), 1);
        assert_eq!(add_to_cart(&session, MelonId::new(14)).await.unwrap(), 2);

        let cart: Cart = session.get(session_keys::CART).await.unwrap().unwrap();
        assert_eq!(cart.quantity(MelonId::new(14)), Some(2));
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn test_add_two_distinct_melons() {
        let session = session();

        add_to_cart(&session, MelonId::new(14)).await.unwrap();
        add_to_cart(&session, MelonId::new(21)).await.unwrap();

        let cart: Cart = session.get(session_keys::CART).await.unwrap().unwrap();
        assert_eq!(cart.quantity(MelonId::new(14)), Some(1));
        assert_eq!(cart.quantity(MelonId::new(21)), Some(1));
    }

    #[tokio::test]
    async fn test_view_prices_lines_and_total() {
        let (_file, catalog) = catalog();
        let session = session();

        add_to_cart(&session, MelonId::new(14)).await.unwrap();
        add_to_cart(&session, MelonId::new(14)).await.unwrap();

        let view = view_cart(&session, &catalog).await.unwrap();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].melon.id, MelonId::new(14));
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.lines[0].line_total.to_string(), "$5.00");
        assert_eq!(view.order_total.to_string(), "$5.00");
    }

    #[tokio::test]
    async fn test_view_sums_across_lines() {
        let (_file, catalog) = catalog();
        let session = session();

        add_to_cart(&session, MelonId::new(14)).await.unwrap();
        add_to_cart(&session, MelonId::new(21)).await.unwrap();
        add_to_cart(&session, MelonId::new(21)).await.unwrap();

        let view = view_cart(&session, &catalog).await.unwrap();
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.order_total.to_string(), "$7.50");
    }

    #[tokio::test]
    async fn test_view_without_cart_key_is_empty_signal() {
        let (_file, catalog) = catalog();
        let session = session();

        assert!(matches!(
            view_cart(&session, &catalog).await,
            Err(CartError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_view_with_stale_id_fails_whole_view() {
        let (_file, catalog) = catalog();
        let session = session();

        // Valid melon plus one the catalog does not know.
        add_to_cart(&session, MelonId::new(14)).await.unwrap();
        add_to_cart(&session, MelonId::new(999)).await.unwrap();

        assert!(matches!(
            view_cart(&session, &catalog).await,
            Err(CartError::UnknownMelon(NotFoundError::Melon(id))) if id == MelonId::new(999)
        ));
    }
}
