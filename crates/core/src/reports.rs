//! Damage Reports

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{categories::Category, discounts::DiscountPercent, pricing::deserialize_amount};

/// Photo reference used when a report is registered without a picture.
pub const PLACEHOLDER_PHOTO_URL: &str = "https://placehold.co/600x400/cccccc/ffffff?text=Avaria";

/// One inspected, discounted unit of inventory.
///
/// Product name, category and original price are copied from the catalog when the report is
/// registered, so later catalog changes do not rewrite history.
///
/// Reports written by the browser dashboard still load: prices as `"R$ 2.549,15"`, discounts
/// as `"15%"`, Portuguese category labels and a missing serial number are all accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageReport {
    /// Unique, monotonically assigned identifier
    pub id: u64,

    /// Product SKU
    pub code: String,

    /// Serial number of the physical unit
    #[serde(default)]
    pub serial_number: String,

    /// Product name at registration time
    pub product_name: String,

    /// Description of the damage
    pub damage: String,

    /// Discount granted for the damage
    pub discount: DiscountPercent,

    /// Who registered the unit
    pub seller: String,

    /// When the unit was registered
    pub date: Timestamp,

    /// Product category at registration time
    pub category: Category,

    /// Price after the discount
    #[serde(deserialize_with = "deserialize_amount")]
    pub new_price: Decimal,

    /// Catalog price at registration time
    #[serde(deserialize_with = "deserialize_amount")]
    pub original_price: Decimal,

    /// Image of the damage
    pub photo_url: String,
}

impl DamageReport {
    /// Calendar date of the report in UTC.
    pub fn date_utc(&self) -> Date {
        self.date.to_zoned(TimeZone::UTC).date()
    }
}

/// Identifier for the next report: one above the current maximum, or 1 for an empty collection.
pub fn next_report_id(reports: &[DamageReport]) -> u64 {
    reports
        .iter()
        .map(|report| report.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}
