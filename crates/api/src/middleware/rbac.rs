//! Authorization extractors layered on top of [`AuthEmployee`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use hemline_core::error::CoreError;
use hemline_db::models::employee::Employee;

use super::auth::AuthEmployee;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an employee with admin or superuser privileges. Rejects with
/// 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(employee): RequireAdmin) -> AppResult<Json<()>> {
///     // employee is guaranteed admin or superuser here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub Employee);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthEmployee(employee) = AuthEmployee::from_request_parts(parts, state).await?;
        if !employee.has_admin_access() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin or superuser role required".into(),
            )));
        }
        Ok(RequireAdmin(employee))
    }
}
