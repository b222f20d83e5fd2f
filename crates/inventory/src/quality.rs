//! Bounded shelf-state value objects.

use serde::{Deserialize, Serialize};

use shelflife_core::ValueObject;

/// Lower bound enforced on every quality mutation.
pub const MIN_QUALITY: i32 = 0;

/// Upper bound enforced on every quality mutation.
pub const MAX_QUALITY: i32 = 50;

/// Conventional quality of legendary items.
///
/// Not enforced anywhere: legendary items are exempt from the bounds, not
/// pinned to this value.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Quality of an inventory item.
///
/// Semantically bounded to `[MIN_QUALITY, MAX_QUALITY]`, but the bound is
/// enforced only by the [`Quality::increased`] / [`Quality::decreased`]
/// primitives. Construction accepts any value as-is; an out-of-range quality
/// is only pulled toward the bounds when an update next touches it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Raise by `amount`, clamped to `MAX_QUALITY`.
    pub fn increased(self, amount: i32) -> Self {
        Self(i32::min(MAX_QUALITY, self.0 + amount))
    }

    /// Lower by `amount`, clamped to `MIN_QUALITY`.
    pub fn decreased(self, amount: i32) -> Self {
        Self(i32::max(MIN_QUALITY, self.0 - amount))
    }
}

impl ValueObject for Quality {}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Days remaining before the sell-by date. Negative means the date is past.
///
/// Unbounded in both directions; only the daily tick moves it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellIn(i32);

impl SellIn {
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    pub fn days(self) -> i32 {
        self.0
    }

    /// One day closer to (or further past) the sell-by date.
    pub fn advanced(self) -> Self {
        Self(self.0 - 1)
    }

    /// Strictly past the sell-by date.
    pub fn is_past(self) -> bool {
        self.0 < 0
    }
}

impl ValueObject for SellIn {}

impl core::fmt::Display for SellIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
