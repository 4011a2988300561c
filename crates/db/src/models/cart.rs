//! Cart item model and joined read shapes.

use sqlx::FromRow;

use hemline_core::types::DbId;

/// A cart line from the `cart_items` table.
///
/// One row per (customer, product, size); merging is done with an upsert in
/// the repository.
#[derive(Debug, Clone, FromRow)]
pub struct CartItem {
    pub id: DbId,
    pub customer_id: DbId,
    pub product_id: DbId,
    pub size_id: DbId,
    pub qty: i32,
}

/// A cart line joined with its product and size for the summary endpoint.
#[derive(Debug, Clone, FromRow)]
pub struct CartLine {
    pub product_id: DbId,
    pub name: String,
    pub slug: String,
    pub product_type: String,
    /// Unit price in whole currency units.
    pub price: i64,
    pub qty: i32,
    pub size_label: String,
    /// First image path for the product, if any.
    pub image_path: Option<String>,
}
