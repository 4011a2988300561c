//! Handlers for `/admin` authentication and employee management.
//!
//! Login requires at least one back-office flag; management operations
//! require admin or superuser via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use hemline_core::error::CoreError;
use hemline_core::types::DbId;
use hemline_db::models::employee::{CreateEmployee, EmployeeResponse};
use hemline_db::repositories::{EmployeeRepo, RoleRepo};

use crate::auth::jwt::{generate_access_token, hash_token, PrincipalKind};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct EmployeeLoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful employee login response.
#[derive(Debug, Serialize)]
pub struct EmployeeTokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Privilege labels, e.g. `["admin", "staff"]`.
    pub roles: Vec<&'static str>,
}

/// Request body for `POST /admin/employees`.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_no: String,
}

/// Request body for `PUT /admin/employees/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub disabled: bool,
}

/// Request body for `PUT /admin/employees/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct AssignRoleRequest {
    pub role_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/login
///
/// Authenticate an employee. Accounts without any back-office flag are
/// rejected as if the credentials were wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<EmployeeLoginRequest>,
) -> AppResult<Json<EmployeeTokenResponse>> {
    let employee = EmployeeRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    if employee.is_disabled {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is disabled".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &employee.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid || !employee.has_staff_access() {
        return Err(invalid_credentials());
    }

    let token = generate_access_token(employee.id, PrincipalKind::Employee, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    EmployeeRepo::record_login(&state.pool, employee.id, &hash_token(&token)).await?;

    Ok(Json(EmployeeTokenResponse {
        access_token: token,
        token_type: "bearer",
        roles: employee.role_labels(),
    }))
}

/// POST /api/v1/admin/logout
///
/// Revoke the employee's active token. 204.
pub async fn logout(
    State(state): State<AppState>,
    AuthEmployee(employee): AuthEmployee,
) -> AppResult<StatusCode> {
    EmployeeRepo::clear_token(&state.pool, employee.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/employees
///
/// Hire a new staff employee. Username and email are lowercased before
/// insert; duplicates map to 409 via the unique constraints.
pub async fn create_employee(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateEmployee {
        username: input.username.to_lowercase(),
        email: input.email.to_lowercase(),
        first_name: input.first_name,
        last_name: input.last_name,
        phone_no: input.phone_no,
        password_hash: hashed,
    };

    let employee = EmployeeRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(&employee))))
}

/// GET /api/v1/admin/employees
///
/// All employees except superusers, with display role labels.
pub async fn list_employees(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = EmployeeRepo::list_visible(&state.pool).await?;
    let response = employees.iter().map(EmployeeResponse::from).collect();
    Ok(Json(response))
}

/// PUT /api/v1/admin/employees/{id}/status
///
/// Enable or disable an employee. 204.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<StatusCode> {
    let updated = EmployeeRepo::set_disabled(&state.pool, id, input.disabled).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))
    }
}

/// PUT /api/v1/admin/employees/{id}/role
///
/// Assign an RBAC role to an employee. Reassigning the role the employee
/// already holds is rejected.
pub async fn assign_role(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<AssignRoleRequest>,
) -> AppResult<StatusCode> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    RoleRepo::find_by_id(&state.pool, input.role_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Role",
            id: input.role_id,
        }))?;

    if employee.role_id == Some(input.role_id) {
        return Err(AppError::Core(CoreError::Validation(
            "Employee already has this role".into(),
        )));
    }

    EmployeeRepo::set_role(&state.pool, id, input.role_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}
