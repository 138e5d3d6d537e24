//! Product Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{categories::Category, fixtures::FixtureError, pricing::CURRENCY, products::Product};

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product code (SKU)
    pub code: String,

    /// Product name
    pub name: String,

    /// Product category
    pub category: Category,

    /// Product price (e.g., "2999.00 BRL")
    pub price: String,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price)?;

        Ok(Product {
            id: fixture.code,
            name: fixture.name,
            price,
            category: fixture.category,
        })
    }
}

/// Parse price string (e.g., "2999.00 BRL") into an exact amount
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the amount is not a
/// non-negative decimal, or if the currency is not the one prices are kept in.
pub fn parse_price(s: &str) -> Result<Decimal, FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    if currency_code != CURRENCY.iso_alpha_code {
        return Err(FixtureError::UnknownCurrency(currency_code.to_string()));
    }

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2999.00BRL");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_other_currencies() {
        let result = parse_price("2.99 GBP");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "GBP"));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        assert!(matches!(
            parse_price("-1.00 BRL"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_keeps_exact_amount() -> Result<(), FixtureError> {
        assert_eq!(parse_price("2999.00 BRL")?, Decimal::new(299_900, 2));
        assert_eq!(parse_price("0.5 BRL")?, Decimal::new(5, 1));

        Ok(())
    }

    #[test]
    fn converts_fixture_into_product() -> Result<(), FixtureError> {
        let product = Product::try_from(ProductFixture {
            code: "GR-MAD-03".to_string(),
            name: "Guarda-Roupa Casal Madesa Rustic".to_string(),
            category: Category::Furniture,
            price: "999.00 BRL".to_string(),
        })?;

        assert_eq!(product.id, "GR-MAD-03");
        assert_eq!(product.price, Decimal::new(99_900, 2));
        assert_eq!(product.category, Category::Furniture);

        Ok(())
    }
}
