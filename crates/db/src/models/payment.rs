//! Payment details model and DTO.

use sqlx::FromRow;

use hemline_core::types::DbId;

/// Captured card details from the `payment_details` table, one-to-one with
/// an order. Never serialized to API responses in full; the order detail
/// endpoint exposes a masked summary only.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentDetails {
    pub id: DbId,
    pub order_id: DbId,
    pub card_number: String,
    pub card_holder_name: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
    pub billing_address: serde_json::Value,
}

impl PaymentDetails {
    /// Last four digits of the card, for display.
    pub fn card_last_four(&self) -> &str {
        let n = self.card_number.len();
        &self.card_number[n.saturating_sub(4)..]
    }
}

/// DTO for capturing payment details during order placement.
#[derive(Debug)]
pub struct CreatePaymentDetails {
    pub card_number: String,
    pub card_holder_name: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
    pub billing_address: serde_json::Value,
}
