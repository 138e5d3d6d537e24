//! Reports service errors.

use avaria::{export::ExportError, pricing::PricingError, registration::RegistrationError};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ReportsServiceError {
    #[error("storage error")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("failed to compute dashboard figures")]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
