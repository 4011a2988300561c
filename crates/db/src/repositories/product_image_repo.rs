//! Repository for the `product_images` table.

use sqlx::PgPool;

use hemline_core::types::DbId;

use crate::models::product_image::ProductImage;

const COLUMNS: &str = "id, product_id, path";

/// Provides operations for product images.
pub struct ProductImageRepo;

impl ProductImageRepo {
    /// Insert one image row.
    pub async fn create(
        pool: &PgPool,
        product_id: DbId,
        path: &str,
    ) -> Result<ProductImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_images (product_id, path) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(product_id)
            .bind(path)
            .fetch_one(pool)
            .await
    }

    /// List a product's images in upload order.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProductImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_images WHERE product_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
