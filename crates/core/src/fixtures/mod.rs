//! Fixtures
//!
//! Seed data for a store that has never been written to.

use std::{fs, path::Path};

use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    fixtures::{products::ProductFixture, reports::ReportFixture},
    pricing::PricingError,
    products::Product,
    reports::DamageReport,
};

pub mod products;
pub mod reports;

const EMBEDDED_SEED: &str = include_str!("../../fixtures/seed.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two products share a code
    #[error("Duplicate product code: {0}")]
    DuplicateProduct(String),

    /// Two reports share an id
    #[error("Duplicate report id: {0}")]
    DuplicateReport(u64),

    /// Discounted price could not be computed
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

#[derive(Debug, Deserialize)]
struct SeedFixture {
    products: Vec<ProductFixture>,

    #[serde(default)]
    reports: Vec<ReportFixture>,
}

/// Products and reports a fresh store starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    /// Product catalog, in fixture order
    pub products: Vec<Product>,

    /// Damage reports, newest first
    pub reports: Vec<DamageReport>,
}

impl SeedData {
    /// Parse seed data from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price or discount is invalid, a report
    /// references an unknown product, or a product code or report id is repeated.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let fixture: SeedFixture = serde_norway::from_str(contents)?;

        let mut codes = FxHashSet::default();
        let mut products = Vec::with_capacity(fixture.products.len());

        for product_fixture in fixture.products {
            let product: Product = product_fixture.try_into()?;

            if !codes.insert(product.id.to_lowercase()) {
                return Err(FixtureError::DuplicateProduct(product.id));
            }

            products.push(product);
        }

        let mut ids = FxHashSet::default();
        let mut reports = Vec::with_capacity(fixture.reports.len());

        for report_fixture in fixture.reports {
            if !ids.insert(report_fixture.id) {
                return Err(FixtureError::DuplicateReport(report_fixture.id));
            }

            reports.push(report_fixture.into_report(&products)?);
        }

        reports.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(SeedData { products, reports })
    }

    /// Load seed data from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or anything [`SeedData::from_yaml`] returns.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }
}

/// The seed data bundled with the crate.
///
/// # Errors
///
/// Returns an error if the bundled fixture is invalid.
pub fn seed() -> Result<SeedData, FixtureError> {
    SeedData::from_yaml(EMBEDDED_SEED)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::categories::Category;

    use super::*;

    #[test]
    fn bundled_seed_has_catalog_and_one_report() -> TestResult {
        let seed = seed()?;

        let codes: Vec<&str> = seed.products.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(
            codes,
            ["TV-LG-55", "GEL-BRA-01", "NOTE-DELL-I15", "GR-MAD-03", "FOG-CON-05"]
        );

        let [report] = seed.reports.as_slice() else {
            return Err(format!("expected one seed report, got {}", seed.reports.len()).into());
        };

        assert_eq!(report.id, 1);
        assert_eq!(report.code, "TV-LG-55");
        assert_eq!(report.category, Category::Electronics);
        assert_eq!(report.original_price, Decimal::new(299_900, 2));
        assert_eq!(report.new_price, Decimal::new(254_915, 2));
        assert_eq!(report.seller, "João Silva");

        Ok(())
    }

    #[test]
    fn rejects_duplicate_product_codes() {
        let yaml = "
products:
  - { code: A-1, name: A, category: furniture, price: 1.00 BRL }
  - { code: a-1, name: B, category: furniture, price: 2.00 BRL }
";

        let result = SeedData::from_yaml(yaml);

        assert!(matches!(result, Err(FixtureError::DuplicateProduct(code)) if code == "a-1"));
    }

    #[test]
    fn rejects_duplicate_report_ids() {
        let yaml = "
products:
  - { code: A-1, name: A, category: furniture, price: 1.00 BRL }
reports:
  - id: 1
    product: A-1
    serial_number: S1
    damage: x
    discount: 5%
    seller: s
    date: \"2025-01-01T00:00:00Z\"
  - id: 1
    product: A-1
    serial_number: S2
    damage: y
    discount: 5%
    seller: s
    date: \"2025-01-02T00:00:00Z\"
";

        let result = SeedData::from_yaml(yaml);

        assert!(matches!(result, Err(FixtureError::DuplicateReport(1))));
    }

    #[test]
    fn reports_are_ordered_newest_first() -> TestResult {
        let yaml = "
products:
  - { code: A-1, name: A, category: furniture, price: 1.00 BRL }
reports:
  - id: 1
    product: A-1
    serial_number: S1
    damage: x
    discount: 5%
    seller: s
    date: \"2025-01-01T00:00:00Z\"
  - id: 2
    product: A-1
    serial_number: S2
    damage: y
    discount: 5%
    seller: s
    date: \"2025-01-02T00:00:00Z\"
";

        let seed = SeedData::from_yaml(yaml)?;

        let ids: Vec<u64> = seed.reports.iter().map(|r| r.id).collect();

        assert_eq!(ids, [2, 1]);

        Ok(())
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(matches!(
            SeedData::from_yaml("products: [unclosed"),
            Err(FixtureError::Yaml(_))
        ));
    }
}
