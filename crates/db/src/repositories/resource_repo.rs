//! Repository for the `resources` table.

use sqlx::PgPool;

use hemline_core::types::DbId;

use crate::models::rbac::Resource;

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for RBAC resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a new resource. A duplicate name surfaces as a
    /// unique-constraint error.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Resource, sqlx::Error> {
        let query = format!("INSERT INTO resources (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Resource>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a resource by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a resource by name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE name = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all resources ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources ORDER BY id ASC");
        sqlx::query_as::<_, Resource>(&query).fetch_all(pool).await
    }

    /// Delete a resource. Permission rows cascade. Returns `false` if no
    /// row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
