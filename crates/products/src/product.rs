use serde::Serialize;
use std::fmt;

use storefront_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// Entity: Product.
///
/// A named, priced item with a stock level. The stock never goes below zero:
/// removals larger than what is on hand fail with
/// [`DomainError::InsufficientStock`] and leave the product untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: i64,
}

impl Product {
    /// Create a product with no stock.
    pub fn new(name: impl Into<String>, price: Money) -> DomainResult<Self> {
        Self::with_stock(name, price, 0)
    }

    pub fn with_stock(
        name: impl Into<String>,
        price: Money,
        initial_quantity: i64,
    ) -> DomainResult<Self> {
        let name = validate_name(name.into())?;
        if initial_quantity < 0 {
            return Err(DomainError::invalid_argument(format!(
                "initial quantity must be non-negative (got {initial_quantity})"
            )));
        }

        Ok(Self {
            id: ProductId::new(),
            name,
            price,
            quantity: initial_quantity,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    /// Units currently in stock.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    pub fn set_price(&mut self, price: Money) {
        self.price = price;
    }

    pub fn add_stock(&mut self, amount: i64) -> DomainResult<()> {
        if amount < 0 {
            return Err(DomainError::invalid_argument(format!(
                "amount to add must be non-negative (got {amount})"
            )));
        }
        let quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::invalid_argument("stock level overflow"))?;

        tracing::debug!(product_id = %self.id, amount, stock = quantity, "stock added");
        self.quantity = quantity;
        Ok(())
    }

    /// Take `amount` units out of stock.
    ///
    /// Asking for more than is on hand is a business-rule violation, not a
    /// contract violation: callers are expected to handle it.
    pub fn remove_stock(&mut self, amount: i64) -> DomainResult<()> {
        if amount < 0 {
            return Err(DomainError::invalid_argument(format!(
                "amount to remove must be non-negative (got {amount})"
            )));
        }
        if amount > self.quantity {
            return Err(DomainError::insufficient_stock(amount, self.quantity));
        }

        self.quantity -= amount;
        tracing::debug!(product_id = %self.id, amount, stock = self.quantity, "stock removed");
        Ok(())
    }
}

fn validate_name(name: String) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_argument("name must not be empty"));
    }
    Ok(trimmed.to_string())
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (Stock: {})", self.name, self.price, self.quantity)
    }
}
