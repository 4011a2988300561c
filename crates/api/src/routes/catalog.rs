//! Route definitions for the public catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes mounted at `/products`.
///
/// ```text
/// GET /          -> list_products (?type=&page=&per_page=)
/// GET /{slug}    -> get_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_products))
        .route("/{slug}", get(catalog::get_product))
}
