//! The per-visitor shopping cart.
//!
//! A cart is a mapping of melon id to desired quantity. It lives inside the
//! visitor's session (the storefront crate handles that plumbing); this module
//! is only the mapping and its rules:
//!
//! - quantities are always >= 1; an id that would reach quantity 0 is absent,
//!   never present-with-zero
//! - adding an id that is already present increments its quantity by 1
//! - iteration order is melon-id order, so rendering is deterministic
//!
//! Adding does not validate the id against the catalog. A stale or bogus id
//! surfaces when the cart is priced against the catalog at view time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::MelonId;

/// Mapping of melon id to quantity, serialized into the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: BTreeMap<MelonId, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a melon, returning the new quantity.
    pub fn add(&mut self, id: MelonId) -> u32 {
        let quantity = self.items.entry(id).or_insert(0);
        *quantity += 1;
        *quantity
    }

    /// Quantity of a melon, or `None` if it is not in the cart.
    #[must_use]
    pub fn quantity(&self, id: MelonId) -> Option<u32> {
        self.items.get(&id).copied()
    }

    /// Number of distinct melon ids in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all ids.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.values().sum()
    }

    /// Entries in melon-id order.
    pub fn iter(&self) -> impl Iterator<Item = (MelonId, u32)> + '_ {
        self.items.iter().map(|(&id, &quantity)| (id, quantity))
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = (&'a MelonId, &'a u32);
    type IntoIter = std::collections::btree_map::Iter<'a, MelonId, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_add_same_id_twice() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(MelonId::new(14)), 1);
        assert_eq!(cart.add(MelonId::new(14)), 2);

        assert_eq!(cart.quantity(MelonId::new(14)), Some(2));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.unit_count(), 2);
    }

    #[test]
    fn test_add_distinct_ids() {
        let mut cart = Cart::new();
        cart.add(MelonId::new(14));
        cart.add(MelonId::new(21));

        assert_eq!(cart.quantity(MelonId::new(14)), Some(1));
        assert_eq!(cart.quantity(MelonId::new(21)), Some(1));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_absent_id_has_no_entry() {
        let cart = Cart::new();
        assert_eq!(cart.quantity(MelonId::new(14)), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_iteration_in_id_order() {
        let mut cart = Cart::new();
        cart.add(MelonId::new(67));
        cart.add(MelonId::new(2));
        cart.add(MelonId::new(14));

        let ids: Vec<u32> = cart.iter().map(|(id, _)| id.as_u32()).collect();
        assert_eq!(ids, vec![2, 14, 67]);
    }

    #[test]
    fn test_serde_roundtrip_through_session_value() {
        // The session layer stores values as JSON; keys must survive the trip.
        let mut cart = Cart::new();
        cart.add(MelonId::new(14));
        cart.add(MelonId::new(14));
        cart.add(MelonId::new(21));

        let value = serde_json::to_value(&cart).unwrap();
        let restored: Cart = serde_json::from_value(value).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.quantity(MelonId::new(14)), Some(2));
    }
}
