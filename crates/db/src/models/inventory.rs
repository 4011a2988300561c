//! Inventory model: per-(product, size) stock levels.

use serde::Serialize;
use sqlx::FromRow;

use hemline_core::types::DbId;

/// A stock row from the `inventory` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryLevel {
    pub id: DbId,
    pub product_id: DbId,
    pub size_id: DbId,
    pub quantity: i32,
}

/// Joined stock view: size label plus remaining quantity.
///
/// Drives the `available_sizes` maps in catalog, wishlist, and cart
/// responses (a size is available when `quantity > 0`).
#[derive(Debug, Clone, FromRow)]
pub struct SizeQuantity {
    pub label: String,
    pub quantity: i32,
}
