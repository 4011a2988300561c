//! Repository for the `role_permissions` table.

use sqlx::PgPool;

use hemline_core::types::DbId;

use crate::models::rbac::{PermissionGrants, RolePermission};

const COLUMNS: &str = "id, role_id, resource_id, can_read, can_write, can_update, can_delete";

/// Provides operations on the (role, resource) grant matrix.
pub struct PermissionRepo;

impl PermissionRepo {
    /// Insert or replace the grants for a (role, resource) pair.
    pub async fn upsert(
        pool: &PgPool,
        role_id: DbId,
        resource_id: DbId,
        grants: PermissionGrants,
    ) -> Result<RolePermission, sqlx::Error> {
        let query = format!(
            "INSERT INTO role_permissions (role_id, resource_id, can_read, can_write, can_update, can_delete)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (role_id, resource_id) DO UPDATE SET
                can_read = EXCLUDED.can_read,
                can_write = EXCLUDED.can_write,
                can_update = EXCLUDED.can_update,
                can_delete = EXCLUDED.can_delete
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RolePermission>(&query)
            .bind(role_id)
            .bind(resource_id)
            .bind(grants.can_read)
            .bind(grants.can_write)
            .bind(grants.can_update)
            .bind(grants.can_delete)
            .fetch_one(pool)
            .await
    }

    /// List all grants for a role.
    pub async fn list_for_role(
        pool: &PgPool,
        role_id: DbId,
    ) -> Result<Vec<RolePermission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM role_permissions WHERE role_id = $1 ORDER BY resource_id ASC"
        );
        sqlx::query_as::<_, RolePermission>(&query)
            .bind(role_id)
            .fetch_all(pool)
            .await
    }
}
