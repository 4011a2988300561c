//! Postal address fields shared by stored addresses and order snapshots.
//!
//! The same shape is used three ways: as the request body when a customer
//! adds an address, as the `delivery_address` JSONB snapshot on orders, and
//! as the `billing_address` JSONB snapshot on payment details. Orders must
//! keep rendering after the source address row is edited or deleted, which
//! is why the snapshot is a copy and not a foreign key.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// A complete postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AddressFields {
    /// Recipient name.
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(custom(
        function = "validate_phone_no",
        message = "Phone number must be exactly 10 digits"
    ))]
    pub phone_no: String,
    /// Street address line.
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(length(min = 1, max = 20))]
    pub city: String,
    #[validate(length(min = 1, max = 20))]
    pub state: String,
    #[validate(custom(
        function = "validate_pin_code",
        message = "PIN code must be exactly 6 digits"
    ))]
    pub pin_code: String,
}

impl AddressFields {
    /// Run field validation, folding failures into a [`CoreError`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}

/// Phone numbers are exactly 10 digits.
pub fn validate_phone_no(value: &str) -> Result<(), ValidationError> {
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone_no"))
    }
}

/// PIN codes are exactly 6 digits.
pub fn validate_pin_code(value: &str) -> Result<(), ValidationError> {
    if value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("pin_code"))
    }
}
