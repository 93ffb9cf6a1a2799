//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same thing when their identifiers match, no matter how
/// far their attributes have drifted apart.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison (as opposed to attribute equality).
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
