//! Settings service errors.

use avaria::discounts::DiscountError;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum SettingsServiceError {
    #[error("storage error")]
    Store(#[from] StoreError),

    #[error("invalid discount limit")]
    InvalidDiscount(#[from] DiscountError),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
