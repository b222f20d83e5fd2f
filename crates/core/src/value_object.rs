//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attributes are the same value. They represent
/// concepts where identity doesn't matter, only the values matter.
///
/// In this domain `Quality` and `SellIn` are value objects: a quality of 20
/// is a quality of 20 regardless of which item carries it. The `Item` that
/// holds them is an entity (identified by its name across state changes).
///
/// "Mutating" a value object means producing a new one - the clamped
/// increase/decrease operations on `Quality` return fresh values rather
/// than editing in place. This keeps the daily transition functions pure
/// and trivially testable.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
