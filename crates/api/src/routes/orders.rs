//! Route definitions for checkout and order history.

use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Order routes mounted at `/orders`.
///
/// ```text
/// GET  /             -> list_orders
/// POST /             -> place_order
/// GET  /{order_ref}  -> get_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list_orders).post(orders::place_order))
        .route("/{order_ref}", get(orders::get_order))
}
