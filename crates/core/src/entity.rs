//! Entity trait: identity + continuity across state changes.
//!
//! An inventory item keeps its identity while its shelf state (days left,
//! quality) changes every simulated day. Identity here is whatever the
//! domain says it is; for catalog items it is the item name.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier. Does not change over the entity's
    /// lifetime.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
