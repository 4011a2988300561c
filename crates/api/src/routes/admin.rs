//! Route definitions for the back office.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{admin, admin_catalog, admin_rbac};
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// ```text
/// POST   /login                      -> login
/// POST   /logout                     -> logout
///
/// GET    /employees                  -> list_employees
/// POST   /employees                  -> create_employee
/// PUT    /employees/{id}/status      -> update_status
/// PUT    /employees/{id}/role        -> assign_role
///
/// GET    /roles                      -> list_roles
/// POST   /roles                      -> create_role
/// DELETE /roles/{id}                 -> delete_role
/// GET    /resources                  -> list_resources
/// POST   /resources                  -> create_resource
/// DELETE /resources/{id}             -> delete_resource
/// PUT    /permissions                -> upsert_permissions
///
/// GET    /products                   -> list_products
/// POST   /products                   -> create_product
/// POST   /products/{id}/images       -> upload_images
/// PUT    /products/{id}/inventory    -> update_inventory
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Employee auth.
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
        // Employee management.
        .route(
            "/employees",
            get(admin::list_employees).post(admin::create_employee),
        )
        .route("/employees/{id}/status", put(admin::update_status))
        .route("/employees/{id}/role", put(admin::assign_role))
        // RBAC management.
        .route(
            "/roles",
            get(admin_rbac::list_roles).post(admin_rbac::create_role),
        )
        .route("/roles/{id}", delete(admin_rbac::delete_role))
        .route(
            "/resources",
            get(admin_rbac::list_resources).post(admin_rbac::create_resource),
        )
        .route("/resources/{id}", delete(admin_rbac::delete_resource))
        .route("/permissions", put(admin_rbac::upsert_permissions))
        // Catalog management.
        .route(
            "/products",
            get(admin_catalog::list_products).post(admin_catalog::create_product),
        )
        .route(
            "/products/{id}/images",
            post(admin_catalog::upload_images),
        )
        .route(
            "/products/{id}/inventory",
            put(admin_catalog::update_inventory),
        )
}
