//! Handlers for the `/cart` resource.
//!
//! Mutating endpoints return the refreshed cart summary so clients do not
//! need a follow-up fetch.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hemline_core::cart::validate_line_qty;
use hemline_core::error::CoreError;
use hemline_core::pricing::{cart_total, gst_amount};
use hemline_core::types::DbId;
use hemline_db::models::address::CustomerAddress;
use hemline_db::models::customer::Customer;
use hemline_db::repositories::{AddressRepo, CartRepo, ProductRepo, SizeRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::catalog::{availability_map, product_not_found};
use crate::handlers::wishlist::unknown_size;
use crate::middleware::auth::AuthCustomer;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /cart/items`.
#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    pub slug: String,
    pub size: String,
    pub qty: i32,
}

/// Request body for `PUT /cart/items/qty`.
#[derive(Debug, Deserialize)]
pub struct UpdateQtyRequest {
    pub product_id: DbId,
    pub size: String,
    pub qty: i32,
}

/// Request body for `PUT /cart/items/size`.
#[derive(Debug, Deserialize)]
pub struct UpdateSizeRequest {
    pub product_id: DbId,
    pub from_size: String,
    pub to_size: String,
}

/// Query parameters for `DELETE /cart/items`.
#[derive(Debug, Deserialize)]
pub struct RemoveItemParams {
    pub product_id: DbId,
    pub size: String,
}

/// One cart line in the summary.
#[derive(Debug, Serialize)]
pub struct CartLineResponse {
    pub product_id: DbId,
    pub name: String,
    pub slug: String,
    pub product_type: String,
    pub image: Option<String>,
    pub size: String,
    pub qty: i32,
    /// Unit price, pre-tax.
    pub price: i64,
    pub available_sizes: BTreeMap<String, bool>,
}

/// Response body for `GET /cart/summary` and cart mutations.
#[derive(Debug, Serialize)]
pub struct CartSummaryResponse {
    pub items: Vec<CartLineResponse>,
    /// Sum of line prices before tax.
    pub subtotal: i64,
    pub gst: Decimal,
    pub total: Decimal,
    pub addresses: Vec<CustomerAddress>,
    pub delivery_address: Option<CustomerAddress>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/cart/items
///
/// Add a quantity of (product, size) to the cart. Merging with an existing
/// line clamps at the line cap; a direct quantity above the cap is rejected.
pub async fn add_item(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Json(input): Json<AddCartItemRequest>,
) -> AppResult<(StatusCode, Json<CartSummaryResponse>)> {
    validate_line_qty(input.qty)?;

    let product = ProductRepo::find_by_slug(&state.pool, &input.slug)
        .await?
        .ok_or_else(product_not_found)?;

    let size = SizeRepo::find_by_label(&state.pool, &input.size)
        .await?
        .ok_or_else(|| unknown_size(&input.size))?;

    CartRepo::add_or_merge(&state.pool, customer.id, product.id, size.id, input.qty).await?;

    let summary = build_summary(&state, &customer).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// GET /api/v1/cart/summary
///
/// The full cart: lines, totals, and the customer's addresses.
pub async fn summary(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
) -> AppResult<Json<CartSummaryResponse>> {
    let summary = build_summary(&state, &customer).await?;
    Ok(Json(summary))
}

/// PUT /api/v1/cart/items/qty
///
/// Set the quantity of an existing line.
pub async fn update_qty(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Json(input): Json<UpdateQtyRequest>,
) -> AppResult<Json<CartSummaryResponse>> {
    validate_line_qty(input.qty)?;

    let size = SizeRepo::find_by_label(&state.pool, &input.size)
        .await?
        .ok_or_else(|| unknown_size(&input.size))?;

    CartRepo::set_qty(&state.pool, customer.id, input.product_id, size.id, input.qty)
        .await?
        .ok_or(AppError::Core(CoreError::Missing("Cart item")))?;

    let summary = build_summary(&state, &customer).await?;
    Ok(Json(summary))
}

/// PUT /api/v1/cart/items/size
///
/// Move a line to another size, merging into an existing line for the
/// target size if there is one.
pub async fn update_size(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Json(input): Json<UpdateSizeRequest>,
) -> AppResult<Json<CartSummaryResponse>> {
    let from_size = SizeRepo::find_by_label(&state.pool, &input.from_size)
        .await?
        .ok_or_else(|| unknown_size(&input.from_size))?;
    let to_size = SizeRepo::find_by_label(&state.pool, &input.to_size)
        .await?
        .ok_or_else(|| unknown_size(&input.to_size))?;

    let changed = CartRepo::change_size(
        &state.pool,
        customer.id,
        input.product_id,
        from_size.id,
        to_size.id,
    )
    .await?;
    if !changed {
        return Err(AppError::Core(CoreError::Missing("Cart item")));
    }

    let summary = build_summary(&state, &customer).await?;
    Ok(Json(summary))
}

/// DELETE /api/v1/cart/items?product_id=&size=
///
/// Remove a line and return the refreshed summary.
pub async fn remove_item(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Query(params): Query<RemoveItemParams>,
) -> AppResult<Json<CartSummaryResponse>> {
    let size = SizeRepo::find_by_label(&state.pool, &params.size)
        .await?
        .ok_or_else(|| unknown_size(&params.size))?;

    let removed = CartRepo::remove(&state.pool, customer.id, params.product_id, size.id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::Missing("Cart item")));
    }

    let summary = build_summary(&state, &customer).await?;
    Ok(Json(summary))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Assemble the cart summary: joined lines, GST arithmetic, and addresses.
///
/// Shared by the summary endpoint and every cart mutation (also used by the
/// order handlers to show the pre-checkout state).
pub async fn build_summary(
    state: &AppState,
    customer: &Customer,
) -> AppResult<CartSummaryResponse> {
    let lines = CartRepo::lines_for_customer(&state.pool, customer.id).await?;

    let mut items = Vec::with_capacity(lines.len());
    let mut subtotal: i64 = 0;
    for line in &lines {
        subtotal += line.price * i64::from(line.qty);
        let available_sizes = availability_map(state, line.product_id).await?;
        items.push(CartLineResponse {
            product_id: line.product_id,
            name: line.name.clone(),
            slug: line.slug.clone(),
            product_type: line.product_type.clone(),
            image: line.image_path.as_deref().map(|p| state.config.image_url(p)),
            size: line.size_label.clone(),
            qty: line.qty,
            price: line.price,
            available_sizes,
        });
    }

    let addresses = AddressRepo::list_by_customer(&state.pool, customer.id).await?;
    let delivery_address = customer
        .delivery_address_id
        .and_then(|id| addresses.iter().find(|a| a.id == id).cloned());

    let rate = state.config.tax_rate_percent;
    Ok(CartSummaryResponse {
        subtotal,
        gst: gst_amount(subtotal, rate),
        total: cart_total(subtotal, rate),
        items,
        addresses,
        delivery_address,
    })
}
