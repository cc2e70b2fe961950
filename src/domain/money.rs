use crate::error::ShopError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A positive monetary amount requested for a payment.
///
/// Wraps `rust_decimal::Decimal` so the "strictly positive" rule is checked once,
/// at construction, instead of at every call site.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ShopError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ShopError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Converts to the provider's smallest currency unit (paise, cents).
    ///
    /// Sub-unit fractions are rounded half-even, matching what the provider would do
    /// with a fractional minor amount.
    pub fn to_minor_units(&self) -> Result<u64, ShopError> {
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|minor| minor.round().to_u64())
            .ok_or_else(|| ShopError::ValidationError("Amount is out of range".to_string()))
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ShopError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Renders a price for humans: two decimal places, no currency symbol.
pub fn format_price(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
