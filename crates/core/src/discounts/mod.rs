//! Discounts
//!
//! Damage discounts are whole-number percentages. Values above 100 are rejected at
//! construction, so every [`DiscountPercent`] in circulation is valid.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors specific to discount percentages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// The percentage is above 100.
    #[error("discount must be between 0% and 100%, got {0}%")]
    OutOfRange(u16),

    /// The text could not be read as a percentage.
    #[error("invalid discount: {0}")]
    Invalid(String),
}

/// A discount percentage in `0..=100`.
///
/// Stored as a number; text such as `"15%"` is accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredDiscount", into = "u16")]
pub struct DiscountPercent(u8);

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDiscount {
    Number(u16),
    Text(String),
}

impl DiscountPercent {
    /// No discount.
    pub const ZERO: DiscountPercent = DiscountPercent(0);

    /// The whole price is discounted.
    pub const FULL: DiscountPercent = DiscountPercent(100);

    /// Create a discount percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::OutOfRange`] when `value` is greater than 100.
    pub fn new(value: u16) -> Result<Self, DiscountError> {
        u8::try_from(value)
            .ok()
            .filter(|value| *value <= 100)
            .map(DiscountPercent)
            .ok_or(DiscountError::OutOfRange(value))
    }

    /// The percentage as a whole number, e.g. `15` for 15%.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The percentage as a fraction of one, e.g. `0.15` for 15%.
    pub fn fraction(self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }
}

impl TryFrom<u16> for DiscountPercent {
    type Error = DiscountError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<StoredDiscount> for DiscountPercent {
    type Error = DiscountError;

    fn try_from(stored: StoredDiscount) -> Result<Self, Self::Error> {
        match stored {
            StoredDiscount::Number(value) => Self::new(value),
            StoredDiscount::Text(text) => text.parse(),
        }
    }
}

impl From<DiscountPercent> for u16 {
    fn from(value: DiscountPercent) -> Self {
        u16::from(value.0)
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Accepts `"15"` and `"15%"`.
impl FromStr for DiscountPercent {
    type Err = DiscountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

        let value = digits
            .parse::<u16>()
            .map_err(|_err| DiscountError::Invalid(s.to_string()))?;

        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_accepts_bounds() -> TestResult {
        assert_eq!(DiscountPercent::new(0)?, DiscountPercent::ZERO);
        assert_eq!(DiscountPercent::new(100)?, DiscountPercent::FULL);

        Ok(())
    }

    #[test]
    fn new_rejects_above_one_hundred() {
        assert_eq!(DiscountPercent::new(101), Err(DiscountError::OutOfRange(101)));
        assert_eq!(DiscountPercent::new(300), Err(DiscountError::OutOfRange(300)));
    }

    #[test]
    fn fraction_is_exact() -> TestResult {
        assert_eq!(DiscountPercent::new(15)?.fraction(), Decimal::new(15, 2));

        Ok(())
    }

    #[test]
    fn parses_with_and_without_percent_sign() -> TestResult {
        assert_eq!("15%".parse::<DiscountPercent>()?.value(), 15);
        assert_eq!(" 30 ".parse::<DiscountPercent>()?.value(), 30);
        assert!(matches!(
            "abc".parse::<DiscountPercent>(),
            Err(DiscountError::Invalid(_))
        ));

        Ok(())
    }

    #[test]
    fn deserializes_numbers_and_text() -> TestResult {
        let values: Vec<DiscountPercent> = serde_norway::from_str("[15, \"25%\", \" 5 \"]")?;

        let values: Vec<u8> = values.into_iter().map(DiscountPercent::value).collect();

        assert_eq!(values, [15, 25, 5]);
        assert!(serde_norway::from_str::<DiscountPercent>("\"120%\"").is_err());

        Ok(())
    }

    #[test]
    fn displays_with_percent_sign() -> TestResult {
        assert_eq!(DiscountPercent::new(15)?.to_string(), "15%");

        Ok(())
    }
}
