//! Payment card input validation.
//!
//! Card details are captured at checkout and stored verbatim alongside the
//! order; actual charging is outside this system's scope.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// Card details submitted with a checkout request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentCardInput {
    #[validate(custom(
        function = "validate_card_number",
        message = "Card number must be exactly 16 digits"
    ))]
    pub card_number: String,
    #[validate(length(min = 3, max = 50))]
    pub card_holder_name: String,
    #[validate(range(min = 1, max = 12))]
    pub month: u8,
    #[validate(range(min = 2000, max = 2099))]
    pub year: u16,
    #[validate(custom(function = "validate_cvv", message = "CVV must be exactly 3 digits"))]
    pub cvv: String,
}

impl PaymentCardInput {
    /// Run field validation, folding failures into a [`CoreError`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }

    /// Zero-padded two-digit expiry month, as stored.
    pub fn month_str(&self) -> String {
        format!("{:02}", self.month)
    }

    /// Four-digit expiry year, as stored.
    pub fn year_str(&self) -> String {
        self.year.to_string()
    }
}

/// Card numbers are exactly 16 digits.
pub fn validate_card_number(value: &str) -> Result<(), ValidationError> {
    if value.len() == 16 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("card_number"))
    }
}

/// CVVs are exactly 3 digits.
pub fn validate_cvv(value: &str) -> Result<(), ValidationError> {
    if value.len() == 3 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("cvv"))
    }
}
