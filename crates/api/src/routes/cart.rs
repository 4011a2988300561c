//! Route definitions for the cart.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::cart;
use crate::state::AppState;

/// Cart routes mounted at `/cart`.
///
/// ```text
/// GET    /summary       -> summary
/// POST   /items         -> add_item
/// DELETE /items         -> remove_item (?product_id=&size=)
/// PUT    /items/qty     -> update_qty
/// PUT    /items/size    -> update_size
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(cart::summary))
        .route("/items", post(cart::add_item).delete(cart::remove_item))
        .route("/items/qty", put(cart::update_qty))
        .route("/items/size", put(cart::update_size))
}
