//! Inventory aging domain.
//!
//! Business rules for end-of-day inventory aging, implemented purely as
//! deterministic domain logic (no IO, no clocks, no storage). One update
//! equals one simulated day for every item in the catalog.

pub mod aging;
pub mod category;
pub mod item;
pub mod quality;
pub mod stockroom;

pub use aging::{ShelfState, advance};
pub use category::{AGED_BRIE, BACKSTAGE_PASS, ItemCategory, SULFURAS};
pub use item::Item;
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, Quality, SellIn};
pub use stockroom::{Stockroom, advance_all};
