//! Money value object: a non-negative decimal amount in one currency.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A monetary amount tagged with its currency code.
///
/// Invariants, enforced by every constructor:
/// - `amount >= 0`
/// - `currency` is non-empty, trimmed and uppercase
///
/// All arithmetic returns a new `Money`; operands with different currencies are
/// rejected with [`DomainError::CurrencyMismatch`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoney")]
pub struct Money {
    amount: Decimal,
    currency: String,
}

#[derive(Deserialize)]
struct RawMoney {
    amount: Decimal,
    currency: String,
}

impl TryFrom<RawMoney> for Money {
    type Error = DomainError;

    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Money::new(raw.amount, &raw.currency)
    }
}

impl ValueObject for Money {}

impl Money {
    /// Validate and normalize: the currency code is trimmed of surrounding
    /// whitespace, then uppercased (`" brl "` becomes `"BRL"`).
    pub fn new(amount: Decimal, currency: &str) -> DomainResult<Self> {
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(DomainError::invalid_argument(
                "currency code must not be empty",
            ));
        }
        if amount < Decimal::ZERO {
            return Err(DomainError::invalid_argument(format!(
                "amount must be non-negative (got {amount})"
            )));
        }

        Ok(Self {
            amount,
            currency: currency.to_uppercase(),
        })
    }

    /// Zero in the given currency.
    pub fn zero(currency: &str) -> DomainResult<Self> {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::invalid_argument("amount overflow in addition"))?;
        Ok(self.with_amount(amount))
    }

    /// Subtract `other`; the result may not go below zero.
    pub fn subtract(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        if other.amount > self.amount {
            return Err(DomainError::invalid_argument(format!(
                "cannot subtract {other} from {self}: result would be negative"
            )));
        }
        Ok(self.with_amount(self.amount - other.amount))
    }

    /// Scale by a non-negative factor.
    pub fn multiply(&self, factor: impl Into<Decimal>) -> DomainResult<Money> {
        let factor = factor.into();
        if factor < Decimal::ZERO {
            return Err(DomainError::invalid_argument(format!(
                "factor must be non-negative (got {factor})"
            )));
        }
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| DomainError::invalid_argument("amount overflow in multiplication"))?;
        Ok(self.with_amount(amount))
    }

    pub fn same_currency_as(&self, other: &Money) -> bool {
        self.currency.eq_ignore_ascii_case(&other.currency)
    }

    fn ensure_same_currency(&self, other: &Money) -> DomainResult<()> {
        if self.same_currency_as(other) {
            Ok(())
        } else {
            Err(DomainError::currency_mismatch(&self.currency, &other.currency))
        }
    }

    // Only for amounts already known to be non-negative.
    fn with_amount(&self, amount: Decimal) -> Money {
        Money {
            amount,
            currency: self.currency.clone(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Half-cents round away from zero; `{:.2}` alone would truncate.
        let shown = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2} {}", shown, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl(cents: i64) -> Money {
        Money::new(Decimal::new(cents, 2), "BRL").unwrap()
    }

    #[test]
    fn new_normalizes_currency_to_uppercase() {
        let m = Money::new(Decimal::new(2590, 2), " brl ").unwrap();
        assert_eq!(m.currency(), "BRL");
        assert_eq!(m.amount(), Decimal::new(2590, 2));
    }

    #[test]
    fn new_rejects_blank_currency() {
        for currency in ["", "   ", "\t"] {
            let err = Money::new(Decimal::ONE, currency).unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));
        }
    }

    #[test]
    fn new_rejects_negative_amount() {
        let err = Money::new(Decimal::new(-1, 2), "BRL").unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn display_uses_two_decimals_and_currency_code() {
        assert_eq!(brl(2590).to_string(), "25.90 BRL");
        assert_eq!(Money::new(Decimal::new(5, 0), "usd").unwrap().to_string(), "5.00 USD");
    }

    #[test]
    fn display_rounds_half_cents_away_from_zero() {
        let shown = |mantissa, scale| {
            Money::new(Decimal::new(mantissa, scale), "BRL")
                .unwrap()
                .to_string()
        };
        assert_eq!(shown(1005, 3), "1.01 BRL");
        assert_eq!(shown(1015, 3), "1.02 BRL");
        assert_eq!(shown(25, 3), "0.03 BRL");
        assert_eq!(shown(1004, 3), "1.00 BRL");
    }

    #[test]
    fn display_rounding_does_not_change_the_stored_amount() {
        let m = Money::new(Decimal::new(1005, 3), "BRL").unwrap();
        assert_eq!(m.to_string(), "1.01 BRL");
        assert_eq!(m.amount(), Decimal::new(1005, 3));
    }

    #[test]
    fn equality_ignores_currency_case_and_trailing_zeros() {
        let a = Money::new(Decimal::new(259, 1), "brl").unwrap();
        let b = Money::new(Decimal::new(2590, 2), "BRL").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, brl(2591));
        assert_ne!(a, Money::new(Decimal::new(2590, 2), "USD").unwrap());
    }

    #[test]
    fn add_sums_amounts() {
        assert_eq!(brl(2590).add(&brl(550)).unwrap(), brl(3140));
    }

    #[test]
    fn add_across_currencies_is_a_business_rule_violation() {
        let usd = Money::new(Decimal::ONE, "USD").unwrap();
        let err = brl(100).add(&usd).unwrap_err();
        assert_eq!(err, DomainError::currency_mismatch("BRL", "USD"));
        assert!(err.is_business_rule());
    }

    #[test]
    fn subtract_more_than_available_is_rejected() {
        let err = brl(100).subtract(&brl(101)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn subtract_across_currencies_is_rejected() {
        let usd = Money::new(Decimal::ONE, "USD").unwrap();
        let err = brl(500).subtract(&usd).unwrap_err();
        assert!(matches!(err, DomainError::CurrencyMismatch { .. }));
    }

    #[test]
    fn subtract_to_exactly_zero_is_allowed() {
        assert!(brl(550).subtract(&brl(550)).unwrap().is_zero());
    }

    #[test]
    fn multiply_rejects_negative_factor() {
        let err = brl(100).multiply(-1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn multiply_by_zero_yields_zero() {
        assert!(brl(2590).multiply(0).unwrap().is_zero());
    }

    #[test]
    fn multiply_overflow_is_an_error_not_a_panic() {
        let huge = Money::new(Decimal::MAX, "BRL").unwrap();
        assert!(huge.multiply(2).is_err());
    }

    #[test]
    fn serde_roundtrip_preserves_value() {
        let m = brl(2590);
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn deserialize_enforces_invariants() {
        let negative = r#"{"amount":"-1.00","currency":"BRL"}"#;
        assert!(serde_json::from_str::<Money>(negative).is_err());

        let lowercase = r#"{"amount":"1.00","currency":"brl"}"#;
        let m: Money = serde_json::from_str(lowercase).unwrap();
        assert_eq!(m.currency(), "BRL");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn amount() -> impl Strategy<Value = Decimal> {
            (0i64..1_000_000_000, 0u32..4).prop_map(|(m, scale)| Decimal::new(m, scale))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            #[test]
            fn currency_is_stored_uppercase(a in amount(), currency in "[a-zA-Z]{3}") {
                let m = Money::new(a, &currency).unwrap();
                prop_assert_eq!(m.currency(), currency.to_uppercase());
            }

            #[test]
            fn subtract_undoes_add(a in amount(), b in amount()) {
                let a = Money::new(a, "BRL").unwrap();
                let b = Money::new(b, "brl").unwrap();
                prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
            }

            #[test]
            fn multiply_scales_linearly(a in amount(), k in 0i64..10_000) {
                let m = Money::new(a, "BRL").unwrap();
                prop_assert_eq!(m.multiply(k).unwrap().amount(), a * Decimal::from(k));
            }

            #[test]
            fn amounts_never_go_negative(a in amount(), b in amount()) {
                let a = Money::new(a, "BRL").unwrap();
                let b = Money::new(b, "BRL").unwrap();
                if let Ok(diff) = a.subtract(&b) {
                    prop_assert!(diff.amount() >= Decimal::ZERO);
                }
            }
        }
    }
}
