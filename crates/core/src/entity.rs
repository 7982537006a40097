//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every record in a supply-chain snapshot is an entity: two records with the
/// same id describe the same real-world thing, whatever their other fields say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
