//! Registration
//!
//! Turns a filled-in registration form into a [`DamageReport`].

use std::fmt;

use jiff::Timestamp;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    discounts::DiscountPercent,
    pricing::{PricingError, apply_discount},
    products::Product,
    reports::{DamageReport, PLACEHOLDER_PHOTO_URL, next_report_id},
};

/// Form fields that must be filled before a report can be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// The product code has not been resolved to a catalog product.
    Product,

    /// Serial number of the unit
    SerialNumber,

    /// Damage description
    Damage,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequiredField::Product => "product",
            RequiredField::SerialNumber => "serial number",
            RequiredField::Damage => "damage description",
        })
    }
}

/// Missing-field list; at most one entry per [`RequiredField`].
pub type MissingFields = SmallVec<[RequiredField; 3]>;

/// Errors that block a registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// One or more required fields are empty.
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(MissingFields),

    /// The discount is above the configured maximum.
    #[error("discount of {discount} exceeds the maximum of {limit}")]
    DiscountAboveLimit {
        /// Requested discount
        discount: DiscountPercent,

        /// Configured maximum
        limit: DiscountPercent,
    },

    /// A report for this physical unit already exists.
    #[error("serial number already registered: {0}")]
    DuplicateSerialNumber(String),

    /// The discounted price could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A registration form as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    /// Product resolved from the typed code, if any
    pub product: Option<Product>,

    /// Serial number of the unit
    pub serial_number: String,

    /// Damage description
    pub damage: String,

    /// Discount to apply
    pub discount: DiscountPercent,

    /// Who is registering the unit
    pub seller: String,

    /// Image of the damage; a placeholder is used when absent
    pub photo_url: Option<String>,
}

impl RegistrationDraft {
    /// Every required field that is still empty, in form order.
    pub fn missing_fields(&self) -> MissingFields {
        let mut missing = MissingFields::new();

        if self.product.is_none() {
            missing.push(RequiredField::Product);
        }

        if self.serial_number.trim().is_empty() {
            missing.push(RequiredField::SerialNumber);
        }

        if self.damage.trim().is_empty() {
            missing.push(RequiredField::Damage);
        }

        missing
    }

    /// Check the draft without building a report.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::MissingFields`]: lists every empty required field.
    /// - [`RegistrationError::DiscountAboveLimit`]: the discount exceeds `max_discount`.
    pub fn validate(&self, max_discount: DiscountPercent) -> Result<(), RegistrationError> {
        let missing = self.missing_fields();

        if !missing.is_empty() {
            return Err(RegistrationError::MissingFields(missing));
        }

        if self.discount > max_discount {
            return Err(RegistrationError::DiscountAboveLimit {
                discount: self.discount,
                limit: max_discount,
            });
        }

        Ok(())
    }

    /// Whether `existing` already holds a report for this unit.
    ///
    /// Serial numbers are compared trimmed and case-insensitively.
    pub fn is_registered(&self, existing: &[DamageReport]) -> bool {
        let serial = self.serial_number.trim();

        existing
            .iter()
            .any(|report| report.serial_number.trim().eq_ignore_ascii_case(serial))
    }

    /// Validate the draft and build the report it describes as the next entry of `existing`.
    ///
    /// Product name, category and price are copied from the resolved product.
    ///
    /// # Errors
    ///
    /// Everything [`RegistrationDraft::validate`] returns, plus
    /// [`RegistrationError::DuplicateSerialNumber`] if `existing` already covers the unit and
    /// [`RegistrationError::Pricing`] if the discounted price cannot be computed.
    pub fn build(
        self,
        existing: &[DamageReport],
        registered_at: Timestamp,
        max_discount: DiscountPercent,
    ) -> Result<DamageReport, RegistrationError> {
        self.validate(max_discount)?;

        if self.is_registered(existing) {
            return Err(RegistrationError::DuplicateSerialNumber(
                self.serial_number.trim().to_string(),
            ));
        }

        let Some(product) = self.product else {
            return Err(RegistrationError::MissingFields(
                [RequiredField::Product].into_iter().collect(),
            ));
        };

        let new_price = apply_discount(product.price, self.discount)?;

        let photo_url = self
            .photo_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_PHOTO_URL.to_string());

        Ok(DamageReport {
            id: next_report_id(existing),
            code: product.id,
            serial_number: self.serial_number.trim().to_string(),
            product_name: product.name,
            damage: self.damage.trim().to_string(),
            discount: self.discount,
            seller: self.seller.trim().to_string(),
            date: registered_at,
            category: product.category,
            new_price,
            original_price: product.price,
            photo_url,
        })
    }
}
