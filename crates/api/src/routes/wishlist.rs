//! Route definitions for the wishlist.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::wishlist;
use crate::state::AppState;

/// Wishlist routes mounted at `/wishlist`.
///
/// ```text
/// GET    /                  -> list
/// POST   /items             -> add_item
/// DELETE /items/{slug}      -> remove_item
/// GET    /contains/{slug}   -> contains
/// POST   /move-to-cart      -> move_to_cart
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::list))
        .route("/items", post(wishlist::add_item))
        .route("/items/{slug}", delete(wishlist::remove_item))
        .route("/contains/{slug}", get(wishlist::contains))
        .route("/move-to-cart", post(wishlist::move_to_cart))
}
