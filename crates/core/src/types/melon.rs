//! The melon catalog record.

use serde::{Deserialize, Serialize};

use super::{MelonId, Price};

/// A purchasable melon variety from the catalog file.
///
/// Immutable after load; the catalog store owns every instance for the
/// lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Melon {
    /// Catalog key, unique within the catalog file.
    pub id: MelonId,
    /// Display name, e.g. "Ali Baba Watermelon".
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Path or URL of the product image.
    pub image_url: String,
}
