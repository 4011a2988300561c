//! Customer entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use hemline_core::types::{DbId, Timestamp};

/// Full customer row from the `customers` table.
///
/// Contains the password hash and token hash -- NEVER serialize this to API
/// responses directly. Use [`CustomerResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_no: String,
    pub is_disabled: bool,
    pub password_hash: String,
    /// SHA-256 hex digest of the currently valid access token.
    /// `None` means the customer is logged out.
    pub token_hash: Option<String>,
    pub delivery_address_id: Option<DbId>,
    pub registered_on: Timestamp,
    pub last_login: Timestamp,
}

/// Safe customer representation for API responses (no hashes).
#[derive(Debug, Clone, Serialize)]
pub struct CustomerResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_no: String,
    pub delivery_address_id: Option<DbId>,
    pub registered_on: Timestamp,
}

impl From<&Customer> for CustomerResponse {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            username: c.username.clone(),
            email: c.email.clone(),
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            phone_no: c.phone_no.clone(),
            delivery_address_id: c.delivery_address_id,
            registered_on: c.registered_on,
        }
    }
}

/// DTO for creating a new customer.
#[derive(Debug)]
pub struct CreateCustomer {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_no: String,
    pub password_hash: String,
}
