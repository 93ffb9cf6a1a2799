use serde::Serialize;
use std::fmt;

use storefront_core::{
    AggregateRoot, DomainError, DomainResult, Entity, Money, OrderId, ProductId,
};
use storefront_products::Product;

use crate::item::OrderItem;

/// Currency of the total reported for an order with no lines.
///
/// Fixed rather than derived from context; callers needing another currency
/// should check `Order::is_empty` first.
pub const DEFAULT_CURRENCY: &str = "BRL";

/// Aggregate root: Order.
///
/// Holds at most one line per product identity. Adding a product that is
/// already on the order merges the quantities into a single replacement line
/// (the line keeps its position).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order<'p> {
    id: OrderId,
    items: Vec<OrderItem<'p>>,
    version: u64,
}

impl Default for Order<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> Order<'p> {
    pub fn new() -> Self {
        Self {
            id: OrderId::new(),
            items: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> &[OrderItem<'p>] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for `product_id`, if it is on the order.
    pub fn item_for(&self, product_id: ProductId) -> Option<&OrderItem<'p>> {
        self.items
            .iter()
            .find(|item| item.product().id_typed() == product_id)
    }

    pub fn add_item(&mut self, product: &'p Product, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument(format!(
                "quantity must be positive (got {quantity})"
            )));
        }

        let existing = self
            .items
            .iter()
            .position(|item| item.product().same_identity_as(product));

        match existing {
            Some(idx) => {
                let merged = self.items[idx]
                    .quantity()
                    .checked_add(quantity)
                    .ok_or_else(|| DomainError::invalid_argument("line quantity overflow"))?;
                self.items[idx] = OrderItem::new(product, merged)?;
                tracing::debug!(
                    order_id = %self.id,
                    product_id = %product.id_typed(),
                    quantity = merged,
                    "order line merged"
                );
            }
            None => {
                self.items.push(OrderItem::new(product, quantity)?);
                tracing::debug!(
                    order_id = %self.id,
                    product_id = %product.id_typed(),
                    quantity,
                    "order line added"
                );
            }
        }

        self.version += 1;
        Ok(())
    }

    /// Sum of every line's subtotal.
    ///
    /// An empty order totals zero in [`DEFAULT_CURRENCY`]. Lines priced in
    /// different currencies fail with [`DomainError::CurrencyMismatch`].
    pub fn total(&self) -> DomainResult<Money> {
        let Some((first, rest)) = self.items.split_first() else {
            return Money::zero(DEFAULT_CURRENCY);
        };

        rest.iter()
            .try_fold(first.subtotal()?, |acc, item| acc.add(&item.subtotal()?))
            .map_err(DomainError::in_order_total)
    }
}

impl Entity for Order<'_> {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Order<'_> {
    fn version(&self) -> u64 {
        self.version
    }
}

impl fmt::Display for Order<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order {}: ", self.id)?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        match self.total() {
            Ok(total) => write!(f, " (Total: {total})"),
            Err(e) => write!(f, " (Total: unavailable, {e})"),
        }
    }
}
