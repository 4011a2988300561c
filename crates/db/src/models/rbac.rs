//! RBAC entity models: roles, resources, and the grant matrix.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use hemline_core::types::DbId;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
}

/// A resource row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    pub name: String,
}

/// A (role, resource) grant row from the `role_permissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RolePermission {
    pub id: DbId,
    pub role_id: DbId,
    pub resource_id: DbId,
    pub can_read: bool,
    pub can_write: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

/// The four grant flags, upserted as a unit.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PermissionGrants {
    pub can_read: bool,
    pub can_write: bool,
    pub can_update: bool,
    pub can_delete: bool,
}
