pub mod account;
pub mod addresses;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod health;
pub mod orders;
pub mod wishlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /account/signup                      signup (public)
/// /account/login                       login (public)
/// /account/logout                      logout (requires customer auth)
/// /account/me                          profile
///
/// /products                            listing (?type=&page=&per_page=)
/// /products/{slug}                     detail
///
/// /wishlist                            list
/// /wishlist/items                      add (POST)
/// /wishlist/items/{slug}               remove (DELETE)
/// /wishlist/contains/{slug}            membership probe
/// /wishlist/move-to-cart               move entry into cart (POST)
///
/// /cart/summary                        summary with totals
/// /cart/items                          add (POST), remove (DELETE, query params)
/// /cart/items/qty                      set quantity (PUT)
/// /cart/items/size                     change size (PUT)
///
/// /addresses                           list, create
/// /addresses/{id}/delivery             select delivery address (PUT)
///
/// /orders                              place (POST), history (GET)
/// /orders/{order_ref}                  detail
///
/// /admin/login                         employee login (public)
/// /admin/logout                        employee logout
/// /admin/employees                     list, create (admin only)
/// /admin/employees/{id}/status         enable/disable (PUT)
/// /admin/employees/{id}/role           assign RBAC role (PUT)
/// /admin/roles                         list, create
/// /admin/roles/{id}                    delete
/// /admin/resources                     list, create
/// /admin/resources/{id}                delete
/// /admin/permissions                   upsert grants (PUT)
/// /admin/products                      list, create
/// /admin/products/{id}/images          multipart upload (POST)
/// /admin/products/{id}/inventory       replace stock levels (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Customer account routes.
        .nest("/account", account::router())
        // Public catalog.
        .nest("/products", catalog::router())
        // Wishlist (customer auth via extractors).
        .nest("/wishlist", wishlist::router())
        // Cart.
        .nest("/cart", cart::router())
        // Saved addresses.
        .nest("/addresses", addresses::router())
        // Checkout and order history.
        .nest("/orders", orders::router())
        // Back office: auth, employees, RBAC, catalog management.
        .nest("/admin", admin::router())
}
