//! Customer address model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use hemline_core::address::AddressFields;
use hemline_core::types::DbId;

/// A saved address row from the `customer_addresses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerAddress {
    pub id: DbId,
    pub customer_id: DbId,
    pub name: String,
    pub phone_no: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

impl CustomerAddress {
    /// The snapshot shape written into order JSONB columns.
    pub fn snapshot(&self) -> AddressFields {
        AddressFields {
            name: self.name.clone(),
            phone_no: self.phone_no.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            pin_code: self.pin_code.clone(),
        }
    }
}

/// DTO for creating a new address. The owning customer id is passed
/// separately by the repository.
#[derive(Debug)]
pub struct CreateAddress {
    pub name: String,
    pub phone_no: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

impl From<AddressFields> for CreateAddress {
    fn from(f: AddressFields) -> Self {
        Self {
            name: f.name,
            phone_no: f.phone_no,
            address: f.address,
            city: f.city,
            state: f.state,
            pin_code: f.pin_code,
        }
    }
}
