//! Repository for the `wishlist_items` table.

use sqlx::PgPool;

use hemline_core::cart::MAX_LINE_QTY;
use hemline_core::types::DbId;

use crate::models::wishlist::{WishlistEntry, WishlistItem};

const COLUMNS: &str = "id, customer_id, product_id";

/// Provides operations for wishlist entries.
pub struct WishlistRepo;

impl WishlistRepo {
    /// Insert a wishlist entry. A duplicate (customer, product) pair
    /// surfaces as a unique-constraint error.
    pub async fn add(
        pool: &PgPool,
        customer_id: DbId,
        product_id: DbId,
    ) -> Result<WishlistItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO wishlist_items (customer_id, product_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(customer_id)
            .bind(product_id)
            .fetch_one(pool)
            .await
    }

    /// Find a specific entry.
    pub async fn find(
        pool: &PgPool,
        customer_id: DbId,
        product_id: DbId,
    ) -> Result<Option<WishlistItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wishlist_items WHERE customer_id = $1 AND product_id = $2"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(customer_id)
            .bind(product_id)
            .fetch_optional(pool)
            .await
    }

    /// All of a customer's wishlist entries joined with product summaries.
    pub async fn entries_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<WishlistEntry>, sqlx::Error> {
        sqlx::query_as::<_, WishlistEntry>(
            "SELECT w.product_id, p.name, p.slug, p.price, p.product_type,
                    (SELECT i.path FROM product_images i
                     WHERE i.product_id = p.id ORDER BY i.id ASC LIMIT 1) AS image_path
             FROM wishlist_items w
             JOIN products p ON p.id = w.product_id
             WHERE w.customer_id = $1
             ORDER BY w.id ASC",
        )
        .bind(customer_id)
        .fetch_all(pool)
        .await
    }

    /// Remove an entry. Returns `false` if it did not exist.
    pub async fn remove(
        pool: &PgPool,
        customer_id: DbId,
        product_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM wishlist_items WHERE customer_id = $1 AND product_id = $2",
        )
        .bind(customer_id)
        .bind(product_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Move a wishlist entry into the cart in one transaction: delete the
    /// entry, then merge the quantity into the matching cart line (clamped
    /// at [`MAX_LINE_QTY`]).
    ///
    /// Returns `false` (and changes nothing) if the product is not in the
    /// customer's wishlist.
    pub async fn move_to_cart(
        pool: &PgPool,
        customer_id: DbId,
        product_id: DbId,
        size_id: DbId,
        qty: i32,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted = sqlx::query(
            "DELETE FROM wishlist_items WHERE customer_id = $1 AND product_id = $2",
        )
        .bind(customer_id)
        .bind(product_id)
        .execute(&mut *tx)
        .await?;

        if deleted.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO cart_items (customer_id, product_id, size_id, qty)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (customer_id, product_id, size_id)
                DO UPDATE SET qty = LEAST(cart_items.qty + EXCLUDED.qty, $5)",
        )
        .bind(customer_id)
        .bind(product_id)
        .bind(size_id)
        .bind(qty)
        .bind(MAX_LINE_QTY)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
