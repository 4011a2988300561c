//! Repository for the `cart_items` table.

use sqlx::PgPool;

use hemline_core::cart::MAX_LINE_QTY;
use hemline_core::types::DbId;

use crate::models::cart::{CartItem, CartLine};

const COLUMNS: &str = "id, customer_id, product_id, size_id, qty";

/// Provides operations for cart lines.
pub struct CartRepo;

impl CartRepo {
    /// Add a quantity to the customer's cart.
    ///
    /// If a line for (customer, product, size) already exists the quantities
    /// are merged, clamped at [`MAX_LINE_QTY`]; otherwise a new line is
    /// inserted.
    pub async fn add_or_merge(
        pool: &PgPool,
        customer_id: DbId,
        product_id: DbId,
        size_id: DbId,
        qty: i32,
    ) -> Result<CartItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO cart_items (customer_id, product_id, size_id, qty)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (customer_id, product_id, size_id)
                DO UPDATE SET qty = LEAST(cart_items.qty + EXCLUDED.qty, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(customer_id)
            .bind(product_id)
            .bind(size_id)
            .bind(qty)
            .bind(MAX_LINE_QTY)
            .fetch_one(pool)
            .await
    }

    /// Set the quantity of an existing line. Returns `None` if the line does
    /// not exist.
    pub async fn set_qty(
        pool: &PgPool,
        customer_id: DbId,
        product_id: DbId,
        size_id: DbId,
        qty: i32,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        let query = format!(
            "UPDATE cart_items SET qty = $4
             WHERE customer_id = $1 AND product_id = $2 AND size_id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(customer_id)
            .bind(product_id)
            .bind(size_id)
            .bind(qty)
            .fetch_optional(pool)
            .await
    }

    /// Move a line from one size to another.
    ///
    /// If the customer already has a line in the target size, the source
    /// quantity merges into it (clamped at [`MAX_LINE_QTY`]) and the source
    /// line is deleted; otherwise the source line's size is rewritten.
    /// Returns `false` if no line exists in the source size.
    pub async fn change_size(
        pool: &PgPool,
        customer_id: DbId,
        product_id: DbId,
        from_size_id: DbId,
        to_size_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM cart_items
             WHERE customer_id = $1 AND product_id = $2 AND size_id = $3"
        );
        let source = sqlx::query_as::<_, CartItem>(&query)
            .bind(customer_id)
            .bind(product_id)
            .bind(from_size_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(source) = source else {
            return Ok(false);
        };

        let merged = sqlx::query(
            "UPDATE cart_items SET qty = LEAST(qty + $4, $5)
             WHERE customer_id = $1 AND product_id = $2 AND size_id = $3",
        )
        .bind(customer_id)
        .bind(product_id)
        .bind(to_size_id)
        .bind(source.qty)
        .bind(MAX_LINE_QTY)
        .execute(&mut *tx)
        .await?;

        if merged.rows_affected() > 0 {
            sqlx::query("DELETE FROM cart_items WHERE id = $1")
                .bind(source.id)
                .execute(&mut *tx)
                .await?;
        } else {
            sqlx::query("UPDATE cart_items SET size_id = $2 WHERE id = $1")
                .bind(source.id)
                .bind(to_size_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Remove a line. Returns `false` if it did not exist.
    pub async fn remove(
        pool: &PgPool,
        customer_id: DbId,
        product_id: DbId,
        size_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM cart_items
             WHERE customer_id = $1 AND product_id = $2 AND size_id = $3",
        )
        .bind(customer_id)
        .bind(product_id)
        .bind(size_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All of a customer's cart lines joined with product, size, and first
    /// image, in insertion order.
    pub async fn lines_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<CartLine>, sqlx::Error> {
        sqlx::query_as::<_, CartLine>(
            "SELECT c.product_id, p.name, p.slug, p.product_type, p.price, c.qty,
                    s.label AS size_label,
                    (SELECT i.path FROM product_images i
                     WHERE i.product_id = p.id ORDER BY i.id ASC LIMIT 1) AS image_path
             FROM cart_items c
             JOIN products p ON p.id = c.product_id
             JOIN sizes s ON s.id = c.size_id
             WHERE c.customer_id = $1
             ORDER BY c.id ASC",
        )
        .bind(customer_id)
        .fetch_all(pool)
        .await
    }
}
