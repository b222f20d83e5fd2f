use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult, Entity};

use crate::aging::{self, ShelfState};
use crate::category::ItemCategory;
use crate::quality::{Quality, SellIn};

/// Catalog entry: Item.
///
/// Identity is the name; the aging category is resolved from it exactly once
/// at construction. The daily update touches only `sell_in` and `quality` -
/// items are never created, destroyed, or renamed by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: ItemCategory,
    sell_in: SellIn,
    quality: Quality,
}

impl Item {
    /// Construct from raw parts.
    ///
    /// No validation: any name is accepted (unrecognized names age under the
    /// Normal rule), and an out-of-range quality is kept as-is until an
    /// update touches it.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self::from_parts(name.into(), SellIn::new(sell_in), Quality::new(quality))
    }

    fn from_parts(name: String, sell_in: SellIn, quality: Quality) -> Self {
        let category = ItemCategory::classify(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn sell_in(&self) -> SellIn {
        self.sell_in
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Apply one day's aging under this item's category rules, in place.
    pub fn advance_day(&mut self) {
        let next = aging::advance(self.category, ShelfState::new(self.sell_in, self.quality));
        self.sell_in = next.sell_in;
        self.quality = next.quality;
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

impl FromStr for Item {
    type Err = DomainError;

    /// Parse `"<name>, <sell_in>, <quality>"` (the `Display` shape).
    ///
    /// Names may themselves contain commas ("Sulfuras, Hand of Ragnaros"),
    /// so the two numeric fields are split off the right.
    fn from_str(s: &str) -> DomainResult<Self> {
        let mut fields = s.rsplitn(3, ',');
        let quality = fields.next();
        let sell_in = fields.next();
        let name = fields.next();

        match (name, sell_in, quality) {
            (Some(name), Some(sell_in), Some(quality)) => {
                let sell_in: i32 = sell_in
                    .trim()
                    .parse()
                    .map_err(|e| DomainError::parse(format!("sell_in: {e}")))?;
                let quality: i32 = quality
                    .trim()
                    .parse()
                    .map_err(|e| DomainError::parse(format!("quality: {e}")))?;
                Ok(Item::new(name.trim(), sell_in, quality))
            }
            _ => Err(DomainError::parse(format!(
                "expected `<name>, <sell_in>, <quality>`, got `{s}`"
            ))),
        }
    }
}

/// Wire shape for `Item`. The category is derived state and stays off the
/// wire, so a hand-edited document cannot desynchronize name and rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: SellIn,
    quality: Quality,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::from_parts(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AGED_BRIE, BACKSTAGE_PASS, SULFURAS};

    #[test]
    fn construction_classifies_once_from_the_name() {
        assert_eq!(Item::new(AGED_BRIE, 2, 0).category(), ItemCategory::AgedBrie);
        assert_eq!(
            Item::new(BACKSTAGE_PASS, 15, 20).category(),
            ItemCategory::BackstagePass
        );
        assert_eq!(Item::new(SULFURAS, 0, 80).category(), ItemCategory::Legendary);
        assert_eq!(Item::new("Elixir of the Mongoose", 5, 7).category(), ItemCategory::Normal);
        assert_eq!(Item::new("", 5, 7).category(), ItemCategory::Normal);
    }

    #[test]
    fn advance_day_applies_the_category_rules() {
        let mut dagger = Item::new("+5 Dexterity Vest", 10, 20);
        dagger.advance_day();
        assert_eq!(dagger.sell_in(), SellIn::new(9));
        assert_eq!(dagger.quality(), Quality::new(19));

        let mut sulfuras = Item::new(SULFURAS, 0, 80);
        sulfuras.advance_day();
        assert_eq!(sulfuras, Item::new(SULFURAS, 0, 80));
    }

    #[test]
    fn unknown_names_follow_the_normal_rules() {
        let mut mystery = Item::new("Mystery Box", 5, 10);
        let mut plain = Item::new("Plain Loaf", 5, 10);
        mystery.advance_day();
        plain.advance_day();
        assert_eq!(mystery.sell_in(), plain.sell_in());
        assert_eq!(mystery.quality(), plain.quality());
    }

    #[test]
    fn display_is_name_sell_in_quality() {
        let item = Item::new(AGED_BRIE, 2, 0);
        assert_eq!(item.to_string(), "Aged Brie, 2, 0");

        let item = Item::new(SULFURAS, -1, 80);
        assert_eq!(item.to_string(), "Sulfuras, Hand of Ragnaros, -1, 80");
    }

    #[test]
    fn parse_round_trips_display() {
        for item in [
            Item::new(AGED_BRIE, 2, 0),
            Item::new(BACKSTAGE_PASS, 15, 20),
            Item::new(SULFURAS, -1, 80),
            Item::new("Elixir of the Mongoose", 5, 7),
        ] {
            let parsed: Item = item.to_string().parse().unwrap();
            assert_eq!(parsed, item);
        }
    }

    #[test]
    fn parse_keeps_commas_in_the_name() {
        let item: Item = "Sulfuras, Hand of Ragnaros, 0, 80".parse().unwrap();
        assert_eq!(item.name(), SULFURAS);
        assert_eq!(item.category(), ItemCategory::Legendary);
        assert_eq!(item.sell_in(), SellIn::new(0));
        assert_eq!(item.quality(), Quality::new(80));
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let err = "Aged Brie, 2".parse::<Item>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn parse_rejects_non_numeric_fields() {
        let err = "Aged Brie, two, 0".parse::<Item>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));

        let err = "Aged Brie, 2, zero".parse::<Item>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn serde_round_trip_re_derives_the_category() {
        let item = Item::new(BACKSTAGE_PASS, 15, 20);
        let json = serde_json::to_string(&item).unwrap();
        // Derived state stays off the wire.
        assert!(!json.contains("category"));

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
        assert_eq!(back.category(), ItemCategory::BackstagePass);
    }

    #[test]
    fn entity_identity_is_the_name() {
        let item = Item::new("Elixir of the Mongoose", 5, 7);
        assert_eq!(item.id(), "Elixir of the Mongoose");
    }
}
