//! Type-safe price representation using decimal arithmetic.
//!
//! Prices come out of the catalog file as plain decimal strings ("2.50") and
//! must survive the load boundary without precision loss, which rules out
//! floats. All arithmetic (line totals, order totals) happens on
//! [`rust_decimal::Decimal`].

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is not a decimal number.
    #[error("not a decimal amount: {0:?}")]
    Invalid(String),
    /// The amount is negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative currency amount in dollars.
///
/// Displays as `$X.XX`. Multiplying by a quantity and summing line totals is
/// exact decimal arithmetic.
///
/// ## Examples
///
/// ```
/// use ubermelon_core::Price;
///
/// let price = Price::parse("2.50").unwrap();
/// assert_eq!(price.to_string(), "$2.50");
/// assert_eq!((price * 2).to_string(), "$5.00");
///
/// assert!(Price::parse("free").is_err());
/// assert!(Price::parse("-1.00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero amount, for starting an order-total accumulation.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parse a `Price` from a plain decimal string (no currency symbol).
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| PriceError::Invalid(s.to_owned()))?;
        if amount.is_sign_negative() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
