//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// Catalog entry a damage report is registered against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// SKU; unique and matched case-insensitively.
    pub id: String,

    /// Product name
    pub name: String,

    /// List price
    pub price: Decimal,

    /// Product category
    pub category: Category,
}

/// Find a product by its code.
///
/// Matching is exact but case-insensitive, and whitespace around `code` is ignored. There is no
/// partial matching; an unknown code returns `None`.
pub fn find_by_code<'a>(products: &'a [Product], code: &str) -> Option<&'a Product> {
    let code = code.trim();

    if code.is_empty() {
        return None;
    }

    let needle = code.to_lowercase();

    products
        .iter()
        .find(|product| product.id.to_lowercase() == needle)
}
