//! Order and order item models.

use serde::Serialize;
use sqlx::FromRow;

use hemline_core::types::{DbId, Timestamp};

/// An order row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub customer_id: DbId,
    /// Sequential customer-facing number (rendered as `HL-<n>`).
    pub order_number: i64,
    /// Serialized [`hemline_core::order::OrderStatus`].
    pub status: String,
    /// Address snapshot taken at placement time.
    pub delivery_address: serde_json::Value,
    pub placed_on: Timestamp,
}

/// An order line from the `order_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub product_id: DbId,
    pub size_id: DbId,
    pub qty: i32,
    /// Unit price captured at purchase time.
    pub unit_price: i64,
}

/// The (qty, unit_price) snapshot of one line, for total computation.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct OrderLineAmounts {
    pub qty: i32,
    pub unit_price: i64,
}

/// An order line joined with product and size for the detail endpoint.
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemDetail {
    pub product_id: DbId,
    pub name: String,
    pub slug: String,
    pub product_type: String,
    pub size_label: String,
    pub qty: i32,
    pub unit_price: i64,
    pub image_path: Option<String>,
}
