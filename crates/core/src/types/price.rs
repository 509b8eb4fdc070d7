//! Type-safe money representation using decimal arithmetic.
//!
//! The storefront prices everything in a single currency and renders amounts
//! as `"{label} {amount}"` with two decimal places, e.g. `LE 215.00`.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currency label shown in front of every formatted amount.
pub const DEFAULT_CURRENCY_LABEL: &str = "LE";

/// Errors that can occur when parsing a price from user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("invalid price {0:?}")]
    Invalid(String),
    /// The input is a negative amount.
    #[error("price cannot be negative")]
    Negative,
}

/// Parse a non-negative unit price such as `"85"` or `"12.50"`.
///
/// # Errors
///
/// Returns an error if the input is empty, not a decimal number, or negative.
pub fn parse_price(s: &str) -> Result<Decimal, PriceError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(PriceError::Empty);
    }

    let amount =
        Decimal::from_str(trimmed).map_err(|_| PriceError::Invalid(trimmed.to_owned()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceError::Negative);
    }

    Ok(amount)
}

/// An amount paired with the currency label it is displayed with.
///
/// ## Examples
///
/// ```
/// use hana_store_core::Money;
/// use rust_decimal::Decimal;
///
/// let total = Money::new(Decimal::new(215, 0), "LE");
/// assert_eq!(total.to_string(), "LE 215.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// Label rendered before the amount.
    pub label: String,
}

impl Money {
    /// Create a new amount with the given label.
    #[must_use]
    pub fn new(amount: Decimal, label: impl Into<String>) -> Self {
        Self {
            amount,
            label: label.into(),
        }
    }

    /// Create a new amount with [`DEFAULT_CURRENCY_LABEL`].
    #[must_use]
    pub fn with_default_label(amount: Decimal) -> Self {
        Self::new(amount, DEFAULT_CURRENCY_LABEL)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{} {:.2}", self.label, rounded)
    }
}
