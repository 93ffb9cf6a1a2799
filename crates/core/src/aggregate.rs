//! Aggregate root trait.

use crate::entity::Entity;

/// An entity that owns a consistency boundary.
///
/// Everything inside the aggregate is mutated through the root, and every
/// successful mutation bumps `version()` by one.
pub trait AggregateRoot: Entity {
    /// Monotonically increasing version of the aggregate's state.
    fn version(&self) -> u64;
}
