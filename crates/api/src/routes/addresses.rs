//! Route definitions for saved addresses.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::addresses;
use crate::state::AppState;

/// Address routes mounted at `/addresses`.
///
/// ```text
/// GET  /               -> list
/// POST /               -> create
/// PUT  /{id}/delivery  -> set_delivery
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(addresses::list).post(addresses::create))
        .route("/{id}/delivery", put(addresses::set_delivery))
}
