//! Handlers for the `/addresses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hemline_core::address::AddressFields;
use hemline_core::error::CoreError;
use hemline_core::types::DbId;
use hemline_db::models::address::{CreateAddress, CustomerAddress};
use hemline_db::repositories::{AddressRepo, CustomerRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthCustomer;
use crate::state::AppState;

/// Maximum saved addresses per customer.
const MAX_ADDRESSES: i64 = 3;

/// GET /api/v1/addresses
///
/// The customer's saved addresses, oldest first.
pub async fn list(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
) -> AppResult<Json<Vec<CustomerAddress>>> {
    let addresses = AddressRepo::list_by_customer(&state.pool, customer.id).await?;
    Ok(Json(addresses))
}

/// POST /api/v1/addresses
///
/// Save a new address. Customers are limited to [`MAX_ADDRESSES`].
pub async fn create(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Json(input): Json<AddressFields>,
) -> AppResult<(StatusCode, Json<CustomerAddress>)> {
    input.check()?;

    let count = AddressRepo::count_by_customer(&state.pool, customer.id).await?;
    if count >= MAX_ADDRESSES {
        return Err(AppError::Core(CoreError::Validation(format!(
            "At most {MAX_ADDRESSES} addresses can be saved"
        ))));
    }

    let address =
        AddressRepo::create(&state.pool, customer.id, &CreateAddress::from(input)).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// PUT /api/v1/addresses/{id}/delivery
///
/// Select one of the customer's addresses as the delivery address. 204.
pub async fn set_delivery(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    AddressRepo::find_owned(&state.pool, id, customer.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Address",
            id,
        }))?;

    CustomerRepo::set_delivery_address(&state.pool, customer.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
