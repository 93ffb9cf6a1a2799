//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same values
/// are interchangeable. They are immutable; every "modification" returns a new
/// instance, so the required bounds are only `Clone + PartialEq + Debug`.
///
/// ## Value Object vs Entity
///
/// - `Money { amount: 25.90, currency: "BRL" }` is a value object.
/// - `Product { id: ProductId(...), name: "..." }` is an entity: renaming it
///   does not make it a different product.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
