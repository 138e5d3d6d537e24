//! Damage Report Fixtures

use jiff::Timestamp;
use serde::Deserialize;

use crate::{
    discounts::DiscountPercent,
    fixtures::FixtureError,
    pricing::apply_discount,
    products::{Product, find_by_code},
    reports::{DamageReport, PLACEHOLDER_PHOTO_URL},
};

/// Damage Report Fixture
///
/// Product name, category and prices are taken from the referenced product.
#[derive(Debug, Deserialize)]
pub struct ReportFixture {
    /// Report id
    pub id: u64,

    /// Code of a product defined in the same fixture
    pub product: String,

    /// Serial number of the unit
    pub serial_number: String,

    /// Damage description
    pub damage: String,

    /// Discount (e.g., "15%")
    pub discount: String,

    /// Who registered the unit
    pub seller: String,

    /// Registration time
    pub date: Timestamp,

    /// Image of the damage
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl ReportFixture {
    /// Build the report against the fixture's products.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown, the discount cannot be parsed, or the
    /// discounted price cannot be computed.
    pub fn into_report(self, products: &[Product]) -> Result<DamageReport, FixtureError> {
        let product = find_by_code(products, &self.product)
            .ok_or_else(|| FixtureError::ProductNotFound(self.product.clone()))?;

        let discount = self
            .discount
            .parse::<DiscountPercent>()
            .map_err(|_err| FixtureError::InvalidPercentage(self.discount.clone()))?;

        Ok(DamageReport {
            id: self.id,
            code: product.id.clone(),
            serial_number: self.serial_number,
            product_name: product.name.clone(),
            damage: self.damage,
            discount,
            seller: self.seller,
            date: self.date,
            category: product.category,
            new_price: apply_discount(product.price, discount)?,
            original_price: product.price,
            photo_url: self
                .photo_url
                .unwrap_or_else(|| PLACEHOLDER_PHOTO_URL.to_string()),
        })
    }
}
