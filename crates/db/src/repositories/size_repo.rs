//! Repository for the seeded `sizes` table.

use sqlx::PgPool;

use crate::models::size::Size;

const COLUMNS: &str = "id, label";

/// Provides read operations for the size vocabulary.
pub struct SizeRepo;

impl SizeRepo {
    /// Find a size by its label (e.g. `"xl"`, `"34"`).
    pub async fn find_by_label(pool: &PgPool, label: &str) -> Result<Option<Size>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sizes WHERE label = $1");
        sqlx::query_as::<_, Size>(&query)
            .bind(label)
            .fetch_optional(pool)
            .await
    }

    /// List all sizes in seed order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Size>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sizes ORDER BY id ASC");
        sqlx::query_as::<_, Size>(&query).fetch_all(pool).await
    }
}
