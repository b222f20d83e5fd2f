//! Item categories and name-based classification.

use serde::{Deserialize, Serialize};

/// Name of the cheese that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the concert pass whose value spikes, then collapses.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name of the legendary item that never ages.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Aging rule category.
///
/// Resolved exactly once, from the item name at construction, so the daily
/// update dispatches on a closed enum instead of re-matching strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Normal,
    AgedBrie,
    BackstagePass,
    Legendary,
}

impl ItemCategory {
    /// Exact-match lookup with a default arm.
    ///
    /// Unrecognized names (including the empty string) fall through to
    /// `Normal`. That is a deliberate default-case policy, not a failure
    /// path: the shop stocks arbitrary goods, and ordinary decay is the
    /// rule for anything without special treatment.
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Self::AgedBrie,
            BACKSTAGE_PASS => Self::BackstagePass,
            SULFURAS => Self::Legendary,
            _ => Self::Normal,
        }
    }

    /// Legendary items are exempt from quality bounds and from aging.
    pub fn is_exempt(self) -> bool {
        matches!(self, Self::Legendary)
    }
}
