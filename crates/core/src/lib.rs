//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, typed identifiers, the entity/value-object traits and the
//! `Money` value object.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod math;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult, ErrorKind, MismatchSite};
pub use id::{OrderId, ProductId};
pub use money::Money;
pub use value_object::ValueObject;
