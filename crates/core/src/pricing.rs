//! Pricing
//!
//! Prices are exact decimals for their whole life inside the engine. Rounding to cents happens
//! only when a value is turned into [`Money`] or formatted for display.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::{Deserialize, Deserializer, de};
use thiserror::Error;

use crate::discounts::DiscountPercent;

/// Currency every price is expressed in.
pub const CURRENCY: &Currency = iso::BRL;

const CURRENCY_SYMBOL: &str = "R$";

/// Errors that can occur while pricing or formatting amounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Prices cannot be negative.
    #[error("price cannot be negative: {0}")]
    NegativePrice(Decimal),

    /// Decimal arithmetic overflowed.
    #[error("price arithmetic overflowed")]
    Overflow,

    /// Text could not be read as a currency amount.
    #[error("invalid currency amount: {0}")]
    InvalidAmount(String),
}

/// Apply a percentage discount to an original price.
///
/// The result keeps full precision; `2999.00` at 15% is `2549.1500`.
///
/// # Errors
///
/// - [`PricingError::NegativePrice`]: `original` is below zero.
/// - [`PricingError::Overflow`]: the multiplication overflowed.
pub fn apply_discount(original: Decimal, discount: DiscountPercent) -> Result<Decimal, PricingError> {
    if original.is_sign_negative() && !original.is_zero() {
        return Err(PricingError::NegativePrice(original));
    }

    original
        .checked_mul(Decimal::ONE - discount.fraction())
        .ok_or(PricingError::Overflow)
}

/// Round an amount to cents, half away from zero.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert an exact amount into money, rounding to cents.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] when the amount does not fit in minor units.
pub fn to_money(amount: Decimal) -> Result<Money<'static, Currency>, PricingError> {
    let minor = round_to_cents(amount)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.to_i64())
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, CURRENCY))
}

/// Format an amount as Brazilian reais, e.g. `R$ 2.549,15`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_to_cents(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (units, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{CURRENCY_SYMBOL} {},{cents}", group_thousands(units))
}

/// Format money as Brazilian reais.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    format_currency(Decimal::new(money.to_minor_units(), 2))
}

/// Read an amount formatted by [`format_currency`] back into a decimal.
///
/// Only meant for importing legacy values; computations never go through formatted text.
///
/// # Errors
///
/// Returns [`PricingError::InvalidAmount`] if the text is not a BRL amount.
pub fn parse_currency(text: &str) -> Result<Decimal, PricingError> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };

    let body = unsigned
        .strip_prefix(CURRENCY_SYMBOL)
        .unwrap_or(unsigned)
        .trim()
        .replace('.', "")
        .replace(',', ".");

    if body.is_empty() || body.starts_with('-') {
        return Err(PricingError::InvalidAmount(text.to_string()));
    }

    let amount = body
        .parse::<Decimal>()
        .map_err(|_err| PricingError::InvalidAmount(text.to_string()))?;

    Ok(if negative { -amount } else { amount })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAmount {
    Exact(Decimal),
    Formatted(String),
}

/// Deserialize a stored amount: an exact decimal, or legacy text such as `"R$ 2.549,15"`.
///
/// # Errors
///
/// Fails when the value is neither a decimal nor a formatted BRL amount.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match StoredAmount::deserialize(deserializer)? {
        StoredAmount::Exact(amount) => Ok(amount),
        StoredAmount::Formatted(text) => parse_currency(&text).map_err(de::Error::custom),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push('.');
        }

        grouped.push(ch);
    }

    grouped
}
