//! Domain error model.
//!
//! Errors come in two tiers. Contract violations (malformed input such as a
//! negative quantity or an empty name) are programmer errors and are expected
//! to propagate. Business-rule violations (insufficient stock, mixing
//! currencies) are expected to be caught by callers and shown to users.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Which tier a [`DomainError`] belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input at the API boundary.
    Contract,
    /// A business rule refused an otherwise well-formed request.
    BusinessRule,
}

/// Domain-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (negative amount, empty name, bad range...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Not enough stock to satisfy a removal.
    #[error("Insufficient stock. Requested: {requested}, available: {available}.")]
    InsufficientStock { requested: i64, available: i64 },

    /// Two monetary values with different currencies were combined.
    #[error("{}", describe_currency_mismatch(.site, .expected, .found))]
    CurrencyMismatch {
        site: MismatchSite,
        expected: String,
        found: String,
    },
}

/// Where a currency mismatch was detected; only changes the message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MismatchSite {
    /// `Money` arithmetic (add, subtract).
    Arithmetic,
    /// Summing order lines.
    OrderTotal,
}

fn describe_currency_mismatch(site: &MismatchSite, expected: &str, found: &str) -> String {
    match site {
        MismatchSite::Arithmetic => format!(
            "Cannot operate on two Money instances with different currencies (\"{expected}\" vs \"{found}\")."
        ),
        MismatchSite::OrderTotal => {
            "Cannot compute total for items with different currencies.".to_string()
        }
    }
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn currency_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            site: MismatchSite::Arithmetic,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Re-tag a currency mismatch as found while totaling an order.
    /// Other errors pass through unchanged.
    pub fn in_order_total(self) -> Self {
        match self {
            Self::CurrencyMismatch {
                expected, found, ..
            } => Self::CurrencyMismatch {
                site: MismatchSite::OrderTotal,
                expected,
                found,
            },
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidArgument(_) => ErrorKind::Contract,
            DomainError::InsufficientStock { .. } | DomainError::CurrencyMismatch { .. } => {
                ErrorKind::BusinessRule
            }
        }
    }

    /// True for errors callers are expected to recover from.
    pub fn is_business_rule(&self) -> bool {
        self.kind() == ErrorKind::BusinessRule
    }
}
