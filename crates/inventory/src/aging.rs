//! Daily aging rules.
//!
//! One update is three ordered steps: adjust quality while the sell-by date
//! has not passed, tick `sell_in`, then adjust quality again if the date is
//! now past. Each step is a pure function over the shelf state, dispatched
//! by an explicit match on the category.

use crate::category::ItemCategory;
use crate::quality::{Quality, SellIn};

/// The pair of fields every aging rule reads and rewrites.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShelfState {
    pub sell_in: SellIn,
    pub quality: Quality,
}

impl ShelfState {
    pub fn new(sell_in: SellIn, quality: Quality) -> Self {
        Self { sell_in, quality }
    }
}

/// Advance a shelf state by one day under the given category's rules.
///
/// Total over its input domain: no category, no state, no combination of the
/// two produces an error.
pub fn advance(category: ItemCategory, state: ShelfState) -> ShelfState {
    let state = adjust_before_sell_date(category, state);
    let state = tick_sell_in(category, state);
    adjust_after_sell_date(category, state)
}

fn adjust_before_sell_date(category: ItemCategory, state: ShelfState) -> ShelfState {
    let quality = match category {
        ItemCategory::Normal => state.quality.decreased(1),
        ItemCategory::AgedBrie => state.quality.increased(1),
        ItemCategory::BackstagePass => backstage_bonus(state),
        ItemCategory::Legendary => state.quality,
    };
    ShelfState { quality, ..state }
}

/// Bands are read off the pre-tick `sell_in` and stack: +1 always, +1 more
/// under 11 days, +1 more under 6. Every step passes through the clamp, so
/// the effective gain shrinks near the cap.
fn backstage_bonus(state: ShelfState) -> Quality {
    let days = state.sell_in.days();
    let mut quality = state.quality.increased(1);
    if days < 11 {
        quality = quality.increased(1);
    }
    if days < 6 {
        quality = quality.increased(1);
    }
    quality
}

fn tick_sell_in(category: ItemCategory, state: ShelfState) -> ShelfState {
    match category {
        ItemCategory::Legendary => state,
        _ => ShelfState {
            sell_in: state.sell_in.advanced(),
            ..state
        },
    }
}

fn adjust_after_sell_date(category: ItemCategory, state: ShelfState) -> ShelfState {
    if !state.sell_in.is_past() {
        return state;
    }
    let quality = match category {
        ItemCategory::Normal => state.quality.decreased(1),
        ItemCategory::AgedBrie => state.quality.increased(1),
        // Passes are worthless once the concert has happened. The only
        // quality write that skips the clamp primitives; it lands in
        // bounds regardless.
        ItemCategory::BackstagePass => Quality::new(0),
        ItemCategory::Legendary => state.quality,
    };
    ShelfState { quality, ..state }
}
