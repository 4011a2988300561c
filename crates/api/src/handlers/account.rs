//! Handlers for the `/account` resource (signup, login, logout, profile).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use hemline_core::address::AddressFields;
use hemline_core::error::CoreError;
use hemline_db::models::address::CreateAddress;
use hemline_db::models::customer::{CreateCustomer, CustomerResponse};
use hemline_db::repositories::CustomerRepo;

use crate::auth::jwt::{generate_access_token, hash_token, PrincipalKind};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthCustomer;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /account/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_no: String,
    /// Street address line; becomes the customer's first saved address.
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

/// Request body for `POST /account/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token issued by signup and login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/account/signup
///
/// Create a customer together with their first address (which becomes the
/// delivery address), then log them in. Duplicate username or email maps to
/// 409 via the unique constraints.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<TokenResponse>)> {
    if input.username.is_empty() || input.username.len() > 20 {
        return Err(AppError::Core(CoreError::Validation(
            "Username must be between 1 and 20 characters".into(),
        )));
    }
    if !input.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid email address".into(),
        )));
    }
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let address = AddressFields {
        name: format!("{} {}", input.first_name, input.last_name),
        phone_no: input.phone_no.clone(),
        address: input.address,
        city: input.city,
        state: input.state,
        pin_code: input.pin_code,
    };
    address.check()?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateCustomer {
        username: input.username,
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        phone_no: input.phone_no,
        password_hash: hashed,
    };

    let customer = CustomerRepo::signup(&state.pool, &create_dto, &CreateAddress::from(address))
        .await?;

    let token = issue_token(&state, customer.id).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// POST /api/v1/account/login
///
/// Authenticate with username + password. Issues a fresh token and replaces
/// the stored digest, so any previously issued token stops working.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let customer = CustomerRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    if customer.is_disabled {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is disabled".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &customer.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid_credentials());
    }

    let token = issue_token(&state, customer.id).await?;
    Ok(Json(token))
}

/// POST /api/v1/account/logout
///
/// Clear the stored token digest, revoking the active token. 204.
pub async fn logout(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
) -> AppResult<StatusCode> {
    CustomerRepo::clear_token(&state.pool, customer.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/account/me
///
/// The authenticated customer's profile.
pub async fn me(AuthCustomer(customer): AuthCustomer) -> Json<CustomerResponse> {
    Json(CustomerResponse::from(&customer))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate an access token, persist its digest, and build the response.
async fn issue_token(state: &AppState, customer_id: i64) -> AppResult<TokenResponse> {
    let token = generate_access_token(customer_id, PrincipalKind::Customer, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    CustomerRepo::record_login(&state.pool, customer_id, &hash_token(&token)).await?;

    Ok(TokenResponse {
        access_token: token,
        token_type: "bearer",
    })
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}
