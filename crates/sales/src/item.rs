use serde::Serialize;
use std::fmt;

use storefront_core::{DomainError, DomainResult, Money, ValueObject};
use storefront_products::Product;

/// Order line: a borrowed product and a positive quantity.
///
/// Immutable. A quantity change on an order replaces the whole line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem<'p> {
    product: &'p Product,
    quantity: i64,
}

impl ValueObject for OrderItem<'_> {}

impl<'p> OrderItem<'p> {
    pub fn new(product: &'p Product, quantity: i64) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument(format!(
                "quantity must be positive (got {quantity})"
            )));
        }
        Ok(Self { product, quantity })
    }

    pub fn product(&self) -> &'p Product {
        self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Current product price times quantity.
    pub fn subtotal(&self) -> DomainResult<Money> {
        self.product.price().multiply(self.quantity)
    }
}

impl fmt::Display for OrderItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}: ", self.product.name(), self.quantity)?;
        match self.subtotal() {
            Ok(subtotal) => write!(f, "{subtotal}"),
            Err(e) => write!(f, "<{e}>"),
        }
    }
}
