//! Wishlist item model and joined read shape.

use sqlx::FromRow;

use hemline_core::types::DbId;

/// A wishlist row from the `wishlist_items` table. Unique per
/// (customer, product).
#[derive(Debug, Clone, FromRow)]
pub struct WishlistItem {
    pub id: DbId,
    pub customer_id: DbId,
    pub product_id: DbId,
}

/// A wishlist entry joined with its product for listing.
#[derive(Debug, Clone, FromRow)]
pub struct WishlistEntry {
    pub product_id: DbId,
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub product_type: String,
    pub image_path: Option<String>,
}
