//! Newtype ID for type-safe melon references.

use core::fmt;
use std::num::ParseIntError;

use serde::{Deserialize, Serialize};

/// The catalog key for a melon.
///
/// Wraps the numeric id from the catalog file. The wrapper keeps melon ids
/// from being mixed up with quantities or other integers, and its `FromStr`
/// impl is the single place a raw path/query parameter gets coerced into a
/// catalog key.
///
/// # Example
///
/// ```
/// use ubermelon_core::MelonId;
///
/// let id = MelonId::new(14);
/// assert_eq!(id.to_string(), "14");
/// assert_eq!("14".parse::<MelonId>(), Ok(id));
/// assert!("banana".parse::<MelonId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MelonId(u32);

impl MelonId {
    /// Create a new ID from a u32 value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MelonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MelonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<MelonId> for u32 {
    fn from(id: MelonId) -> Self {
        id.0
    }
}

impl std::str::FromStr for MelonId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}
