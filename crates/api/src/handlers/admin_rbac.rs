//! Handlers for RBAC administration: roles, resources, and the grant matrix.
//!
//! All operations require [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use hemline_core::error::CoreError;
use hemline_core::types::DbId;
use hemline_db::models::rbac::{PermissionGrants, Resource, Role, RolePermission};
use hemline_db::repositories::{PermissionRepo, ResourceRepo, RoleRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Role name reserved for bootstrap accounts; cannot be created via the API.
const RESERVED_ROLE: &str = "superuser";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/roles` and `POST /admin/resources`.
#[derive(Debug, Deserialize)]
pub struct CreateNamedRequest {
    pub name: String,
}

/// Request body for `PUT /admin/permissions`.
#[derive(Debug, Deserialize)]
pub struct UpsertPermissionsRequest {
    pub role: String,
    pub resource: String,
    #[serde(flatten)]
    pub grants: PermissionGrants,
}

// ---------------------------------------------------------------------------
// Role handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/roles
pub async fn list_roles(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Role>>> {
    Ok(Json(RoleRepo::list(&state.pool).await?))
}

/// POST /api/v1/admin/roles
///
/// Create a role. The name is lowercased; the reserved superuser name is
/// refused and duplicates map to 409.
pub async fn create_role(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateNamedRequest>,
) -> AppResult<(StatusCode, Json<Role>)> {
    let name = input.name.trim().to_lowercase();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Role name must not be empty".into(),
        )));
    }
    if name == RESERVED_ROLE {
        return Err(AppError::Core(CoreError::Forbidden(
            "The superuser role cannot be created".into(),
        )));
    }

    let role = RoleRepo::create(&state.pool, &name).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// DELETE /api/v1/admin/roles/{id}
///
/// Delete a role; its permission rows cascade. 204.
pub async fn delete_role(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RoleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Role", id }))
    }
}

// ---------------------------------------------------------------------------
// Resource handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/resources
pub async fn list_resources(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Resource>>> {
    Ok(Json(ResourceRepo::list(&state.pool).await?))
}

/// POST /api/v1/admin/resources
///
/// Create a resource. The name is lowercased; duplicates map to 409.
pub async fn create_resource(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateNamedRequest>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    let name = input.name.trim().to_lowercase();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Resource name must not be empty".into(),
        )));
    }

    let resource = ResourceRepo::create(&state.pool, &name).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// DELETE /api/v1/admin/resources/{id}
///
/// Delete a resource; its permission rows cascade. 204.
pub async fn delete_resource(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ResourceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Permission handlers
// ---------------------------------------------------------------------------

/// PUT /api/v1/admin/permissions
///
/// Set the four grants for a (role, resource) pair, inserting or replacing
/// the row.
pub async fn upsert_permissions(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<UpsertPermissionsRequest>,
) -> AppResult<Json<RolePermission>> {
    let role = RoleRepo::find_by_name(&state.pool, &input.role)
        .await?
        .ok_or(AppError::Core(CoreError::Missing("Role")))?;

    let resource = ResourceRepo::find_by_name(&state.pool, &input.resource)
        .await?
        .ok_or(AppError::Core(CoreError::Missing("Resource")))?;

    let permission =
        PermissionRepo::upsert(&state.pool, role.id, resource.id, input.grants).await?;
    Ok(Json(permission))
}
