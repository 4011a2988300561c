//! Repository for the `inventory` table.

use sqlx::PgPool;

use hemline_core::types::DbId;

use crate::models::inventory::{InventoryLevel, SizeQuantity};

const COLUMNS: &str = "id, product_id, size_id, quantity";

/// Provides operations for per-(product, size) stock levels.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Insert or replace the stock level for a (product, size) pair.
    pub async fn upsert(
        pool: &PgPool,
        product_id: DbId,
        size_id: DbId,
        quantity: i32,
    ) -> Result<InventoryLevel, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory (product_id, size_id, quantity)
             VALUES ($1, $2, $3)
             ON CONFLICT (product_id, size_id) DO UPDATE SET quantity = EXCLUDED.quantity
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryLevel>(&query)
            .bind(product_id)
            .bind(size_id)
            .bind(quantity)
            .fetch_one(pool)
            .await
    }

    /// List a product's stock rows.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<InventoryLevel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inventory WHERE product_id = $1 ORDER BY size_id ASC"
        );
        sqlx::query_as::<_, InventoryLevel>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Per-size stock for a product, joined to size labels.
    ///
    /// Sizes with no inventory row are simply absent; the API treats them
    /// as unavailable.
    pub async fn availability_for_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<SizeQuantity>, sqlx::Error> {
        sqlx::query_as::<_, SizeQuantity>(
            "SELECT s.label, inv.quantity
             FROM inventory inv
             JOIN sizes s ON s.id = inv.size_id
             WHERE inv.product_id = $1
             ORDER BY s.id ASC",
        )
        .bind(product_id)
        .fetch_all(pool)
        .await
    }
}
