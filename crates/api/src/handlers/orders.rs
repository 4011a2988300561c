//! Handlers for the `/orders` resource: checkout and order history.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use hemline_core::error::CoreError;
use hemline_core::order::{format_order_ref, parse_order_ref};
use hemline_core::payment::PaymentCardInput;
use hemline_core::pricing::order_total;
use hemline_core::types::{DbId, Timestamp};
use hemline_db::models::order::Order;
use hemline_db::models::payment::CreatePaymentDetails;
use hemline_db::repositories::{AddressRepo, OrderRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthCustomer;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `POST /orders`.
#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    /// Customer-facing reference, e.g. `"HL-1042"`.
    pub order_ref: String,
    pub status: String,
    pub placed_on: Timestamp,
}

/// One order in the history listing.
#[derive(Debug, Serialize)]
pub struct OrderSummaryResponse {
    pub order_ref: String,
    pub status: String,
    pub placed_on: Timestamp,
    pub delivery_address: serde_json::Value,
    /// Tax-inclusive total from the item price snapshots.
    pub total: Decimal,
}

/// One line in the order detail.
#[derive(Debug, Serialize)]
pub struct OrderItemResponse {
    pub product_id: DbId,
    pub name: String,
    pub slug: String,
    pub product_type: String,
    pub image: Option<String>,
    pub size: String,
    pub qty: i32,
    pub unit_price: i64,
}

/// Masked payment summary in the order detail.
#[derive(Debug, Serialize)]
pub struct PaymentSummaryResponse {
    pub card_last_four: String,
    pub card_holder_name: String,
}

/// Response body for `GET /orders/{order_ref}`.
#[derive(Debug, Serialize)]
pub struct OrderDetailResponse {
    pub order_ref: String,
    pub status: String,
    pub placed_on: Timestamp,
    pub delivery_address: serde_json::Value,
    pub total: Decimal,
    pub items: Vec<OrderItemResponse>,
    pub payment: Option<PaymentSummaryResponse>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/orders
///
/// Place an order from the current cart. The delivery address snapshot
/// comes from the customer's selected address; the card details are
/// validated and captured with the billing snapshot. Empty cart maps
/// to 400, missing delivery address to 404.
pub async fn place_order(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Json(card): Json<PaymentCardInput>,
) -> AppResult<(StatusCode, Json<PlaceOrderResponse>)> {
    card.check()?;

    let address_id = customer
        .delivery_address_id
        .ok_or(AppError::Core(CoreError::Missing("Delivery address")))?;
    let address = AddressRepo::find_owned(&state.pool, address_id, customer.id)
        .await?
        .ok_or(AppError::Core(CoreError::Missing("Delivery address")))?;

    let snapshot = serde_json::to_value(address.snapshot())
        .map_err(|e| AppError::InternalError(format!("Address snapshot error: {e}")))?;

    let payment = CreatePaymentDetails {
        card_number: card.card_number.clone(),
        card_holder_name: card.card_holder_name.clone(),
        expiry_month: card.month_str(),
        expiry_year: card.year_str(),
        cvv: card.cvv.clone(),
        billing_address: snapshot.clone(),
    };

    let order = OrderRepo::place_order(&state.pool, customer.id, &snapshot, &payment)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Validation("Cart is empty".into())))?;

    Ok((
        StatusCode::CREATED,
        Json(PlaceOrderResponse {
            order_ref: format_order_ref(order.order_number),
            status: order.status,
            placed_on: order.placed_on,
        }),
    ))
}

/// GET /api/v1/orders
///
/// The customer's order history, newest first, with tax-inclusive totals.
pub async fn list_orders(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
) -> AppResult<Json<Vec<OrderSummaryResponse>>> {
    let orders = OrderRepo::list_by_customer(&state.pool, customer.id).await?;

    let mut response = Vec::with_capacity(orders.len());
    for order in orders {
        let total = order_total_for(&state, &order).await?;
        response.push(OrderSummaryResponse {
            order_ref: format_order_ref(order.order_number),
            status: order.status,
            placed_on: order.placed_on,
            delivery_address: order.delivery_address,
            total,
        });
    }

    Ok(Json(response))
}

/// GET /api/v1/orders/{order_ref}
///
/// Order detail with item snapshots and a masked payment summary. Scoped to
/// the authenticated customer; other customers' orders read as 404.
pub async fn get_order(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Path(order_ref): Path<String>,
) -> AppResult<Json<OrderDetailResponse>> {
    let order_number = parse_order_ref(&order_ref)?;

    let order = OrderRepo::find_by_order_number(&state.pool, customer.id, order_number)
        .await?
        .ok_or(AppError::Core(CoreError::Missing("Order")))?;

    let total = order_total_for(&state, &order).await?;

    let items = OrderRepo::items_for_order(&state.pool, order.id)
        .await?
        .into_iter()
        .map(|item| OrderItemResponse {
            product_id: item.product_id,
            name: item.name,
            slug: item.slug,
            product_type: item.product_type,
            image: item.image_path.as_deref().map(|p| state.config.image_url(p)),
            size: item.size_label,
            qty: item.qty,
            unit_price: item.unit_price,
        })
        .collect();

    let payment = OrderRepo::payment_for_order(&state.pool, order.id)
        .await?
        .map(|p| PaymentSummaryResponse {
            card_last_four: p.card_last_four().to_string(),
            card_holder_name: p.card_holder_name.clone(),
        });

    Ok(Json(OrderDetailResponse {
        order_ref: format_order_ref(order.order_number),
        status: order.status,
        placed_on: order.placed_on,
        delivery_address: order.delivery_address,
        total,
        items,
        payment,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Tax-inclusive total for an order from its line snapshots.
async fn order_total_for(state: &AppState, order: &Order) -> AppResult<Decimal> {
    let amounts = OrderRepo::line_amounts(&state.pool, order.id).await?;
    let lines: Vec<(i32, i64)> = amounts.iter().map(|a| (a.qty, a.unit_price)).collect();
    Ok(order_total(&lines, state.config.tax_rate_percent))
}
