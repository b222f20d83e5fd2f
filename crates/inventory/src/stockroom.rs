use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Apply one day's aging to every item of a mutable collection, in place.
///
/// Items are independent; order determines iteration only, never the
/// outcome. Returns nothing and signals nothing: the rules are total.
pub fn advance_all(items: &mut [Item]) {
    for item in items {
        item.advance_day();
    }
}

/// The shop's catalog: an ordered collection of items aged one day at a
/// time.
///
/// The stockroom is the only state that persists between updates. It never
/// adds, removes, or renames items on its own; callers stock it once and
/// then advance it day by day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stockroom {
    items: Vec<Item>,
}

impl Stockroom {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply one day's aging to every item, in place, in catalog order.
    pub fn advance_day(&mut self) {
        advance_all(&mut self.items);
    }

    /// Apply `days` consecutive daily updates.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_day();
        }
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
