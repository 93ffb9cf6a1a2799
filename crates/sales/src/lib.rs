//! Sales orders domain module.
//!
//! This crate contains business rules for orders and their line items,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod order;

pub use item::OrderItem;
pub use order::{DEFAULT_CURRENCY, Order};
pub use storefront_core::OrderId;
