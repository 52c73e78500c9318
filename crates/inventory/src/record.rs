//! Inventory record persisted per component.

use serde::{Deserialize, Serialize};

/// One trackable inventory item.
///
/// The document key is the component name. `image_url` is an opaque
/// display hint: carried through persistence and never interpreted.
/// Counts are `u32`, so negative values are unrepresentable once input
/// has been validated. No relationship is enforced between
/// `quantity_in_hand` and `number_working + number_not_working`; the
/// three counts are tracked independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub image_url: String,
    pub quantity_in_hand: u32,
    pub number_working: u32,
    pub number_not_working: u32,
    pub reason: String,
}

impl ComponentRecord {
    /// A freshly catalogued component: zero counts, no reason yet.
    pub fn seeded(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            quantity_in_hand: 0,
            number_working: 0,
            number_not_working: 0,
            reason: String::new(),
        }
    }
}
