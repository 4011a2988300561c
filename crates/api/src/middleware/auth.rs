//! Token-based authentication extractors for Axum handlers.
//!
//! Both extractors parse the `Authorization: Bearer <token>` header, validate
//! the JWT, load the principal row, and compare the token's SHA-256 digest
//! against the stored one. The stored-digest comparison is what makes logout
//! effective: a structurally valid JWT is rejected once the digest has been
//! cleared or replaced by a newer login.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use hemline_core::error::CoreError;
use hemline_db::models::customer::Customer;
use hemline_db::models::employee::Employee;
use hemline_db::repositories::{CustomerRepo, EmployeeRepo};

use crate::auth::jwt::{hash_token, validate_token, Claims, PrincipalKind};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated customer, loaded from the database.
///
/// ```ignore
/// async fn my_handler(AuthCustomer(customer): AuthCustomer) -> AppResult<Json<()>> {
///     tracing::info!(customer_id = customer.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
pub struct AuthCustomer(pub Customer);

impl FromRequestParts<AppState> for AuthCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (token, claims) = bearer_claims(parts, state)?;

        if claims.kind != PrincipalKind::Customer {
            return Err(unauthorized());
        }

        let customer = CustomerRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(unauthorized)?;

        if customer.token_hash.as_deref() != Some(hash_token(&token).as_str()) {
            return Err(unauthorized());
        }

        if customer.is_disabled {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is disabled".into(),
            )));
        }

        Ok(AuthCustomer(customer))
    }
}

/// Authenticated employee with at least one back-office flag.
pub struct AuthEmployee(pub Employee);

impl FromRequestParts<AppState> for AuthEmployee {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (token, claims) = bearer_claims(parts, state)?;

        if claims.kind != PrincipalKind::Employee {
            return Err(unauthorized());
        }

        let employee = EmployeeRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(unauthorized)?;

        if employee.token_hash.as_deref() != Some(hash_token(&token).as_str()) {
            return Err(unauthorized());
        }

        if employee.is_disabled {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is disabled".into(),
            )));
        }

        if !employee.has_staff_access() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Back-office access required".into(),
            )));
        }

        Ok(AuthEmployee(employee))
    }
}

/// Pull the bearer token out of the request and validate it.
fn bearer_claims(parts: &Parts, state: &AppState) -> Result<(String, Claims), AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    let claims = validate_token(token, &state.config.jwt)
        .map_err(|_| AppError::Core(CoreError::Unauthorized("Invalid or expired token".into())))?;

    Ok((token.to_string(), claims))
}

fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Could not validate credentials".into(),
    ))
}
