//! Handlers for the `/wishlist` resource.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use hemline_core::cart::validate_line_qty;
use hemline_core::error::CoreError;
use hemline_core::types::DbId;
use hemline_db::repositories::{ProductRepo, SizeRepo, WishlistRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::catalog::{availability_map, product_not_found};
use crate::middleware::auth::AuthCustomer;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /wishlist/items`.
#[derive(Debug, Deserialize)]
pub struct AddWishlistItemRequest {
    pub slug: String,
}

/// Request body for `POST /wishlist/move-to-cart`.
#[derive(Debug, Deserialize)]
pub struct MoveToCartRequest {
    pub slug: String,
    pub size: String,
    pub qty: i32,
}

/// One wishlist entry in the listing.
#[derive(Debug, Serialize)]
pub struct WishlistEntryResponse {
    pub product_id: DbId,
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub product_type: String,
    pub image: Option<String>,
    pub available_sizes: BTreeMap<String, bool>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/wishlist/items
///
/// Add a product to the wishlist. A product already present maps to 409 via
/// the (customer, product) unique constraint.
pub async fn add_item(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Json(input): Json<AddWishlistItemRequest>,
) -> AppResult<StatusCode> {
    let product = ProductRepo::find_by_slug(&state.pool, &input.slug)
        .await?
        .ok_or_else(product_not_found)?;

    WishlistRepo::add(&state.pool, customer.id, product.id).await?;
    Ok(StatusCode::CREATED)
}

/// GET /api/v1/wishlist
///
/// The customer's wishlist with product summaries and size availability.
pub async fn list(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
) -> AppResult<Json<Vec<WishlistEntryResponse>>> {
    let entries = WishlistRepo::entries_for_customer(&state.pool, customer.id).await?;

    let mut response = Vec::with_capacity(entries.len());
    for entry in entries {
        let available_sizes = availability_map(&state, entry.product_id).await?;
        response.push(WishlistEntryResponse {
            product_id: entry.product_id,
            name: entry.name,
            slug: entry.slug,
            price: entry.price,
            product_type: entry.product_type,
            image: entry.image_path.as_deref().map(|p| state.config.image_url(p)),
            available_sizes,
        });
    }

    Ok(Json(response))
}

/// GET /api/v1/wishlist/contains/{slug}
///
/// Membership probe: 200 when the product is wishlisted, 404 otherwise.
pub async fn contains(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Path(slug): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let product = ProductRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(product_not_found)?;

    WishlistRepo::find(&state.pool, customer.id, product.id)
        .await?
        .ok_or(AppError::Core(CoreError::Missing("Wishlist item")))?;

    Ok(Json(serde_json::json!({ "in_wishlist": true })))
}

/// DELETE /api/v1/wishlist/items/{slug}
///
/// Remove a product from the wishlist. 204, or 404 if absent.
pub async fn remove_item(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    let product = ProductRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(product_not_found)?;

    let removed = WishlistRepo::remove(&state.pool, customer.id, product.id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::Missing("Wishlist item")))
    }
}

/// POST /api/v1/wishlist/move-to-cart
///
/// Move a wishlisted product into the cart in one transaction. Quantities
/// merging with an existing cart line are clamped at the line cap.
pub async fn move_to_cart(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Json(input): Json<MoveToCartRequest>,
) -> AppResult<StatusCode> {
    validate_line_qty(input.qty)?;

    let product = ProductRepo::find_by_slug(&state.pool, &input.slug)
        .await?
        .ok_or_else(product_not_found)?;

    let size = SizeRepo::find_by_label(&state.pool, &input.size)
        .await?
        .ok_or_else(|| unknown_size(&input.size))?;

    let moved =
        WishlistRepo::move_to_cart(&state.pool, customer.id, product.id, size.id, input.qty)
            .await?;
    if moved {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::Validation(
            "Item is not in the wishlist".into(),
        )))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// 400 for unknown size labels (shared with the cart handlers).
pub fn unknown_size(label: &str) -> AppError {
    AppError::Core(CoreError::Validation(format!("Unknown size: {label}")))
}
