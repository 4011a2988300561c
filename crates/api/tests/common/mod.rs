//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`) on top
//! of the per-test database that `#[sqlx::test]` provides, plus request and
//! seeding helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tower::ServiceExt;

use hemline_api::auth::jwt::JwtConfig;
use hemline_api::auth::password::hash_password;
use hemline_api::config::ServerConfig;
use hemline_api::router::build_app_router;
use hemline_api::state::AppState;
use hemline_core::slug::slugify;
use hemline_db::models::address::CreateAddress;
use hemline_db::models::customer::{CreateCustomer, Customer};
use hemline_db::models::employee::{CreateEmployee, Employee};
use hemline_db::models::product::{CreateProduct, Product};
use hemline_db::repositories::{
    CustomerRepo, EmployeeRepo, InventoryRepo, ProductRepo, SizeRepo,
};

/// Password used for all seeded accounts.
pub const TEST_PASSWORD: &str = "test-password-123";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        asset_base_url: "http://localhost:3000/".to_string(),
        static_dir: "static".to_string(),
        tax_rate_percent: Decimal::from(18),
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };

    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn post_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(token)).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn put_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, None, Some(token)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Create a customer (with one address set as delivery) directly in the
/// database. Returns the row; the password is [`TEST_PASSWORD`].
pub async fn seed_customer(pool: &PgPool, username: &str) -> Customer {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let customer = CreateCustomer {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        first_name: "Test".to_string(),
        last_name: "Customer".to_string(),
        phone_no: "9876543210".to_string(),
        password_hash: hashed,
    };
    let address = CreateAddress {
        name: "Test Customer".to_string(),
        phone_no: "9876543210".to_string(),
        address: "14 MG Road".to_string(),
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        pin_code: "560001".to_string(),
    };
    CustomerRepo::signup(pool, &customer, &address)
        .await
        .expect("customer seeding should succeed")
}

/// Create a staff employee directly in the database, optionally promoting
/// them to admin. The password is [`TEST_PASSWORD`].
pub async fn seed_employee(pool: &PgPool, username: &str, is_admin: bool) -> Employee {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let input = CreateEmployee {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        first_name: "Test".to_string(),
        last_name: "Employee".to_string(),
        phone_no: "9876543210".to_string(),
        password_hash: hashed,
    };
    let employee = EmployeeRepo::create(pool, &input)
        .await
        .expect("employee seeding should succeed");

    if is_admin {
        sqlx::query("UPDATE employees SET is_admin = TRUE WHERE id = $1")
            .bind(employee.id)
            .execute(pool)
            .await
            .expect("promotion should succeed");
    }

    EmployeeRepo::find_by_id(pool, employee.id)
        .await
        .expect("reload should succeed")
        .expect("employee should exist")
}

/// Create a product directly in the database.
pub async fn seed_product(pool: &PgPool, name: &str, product_type: &str, price: i64) -> Product {
    let input = CreateProduct {
        name: name.to_string(),
        slug: slugify(name),
        price,
        description: format!("{name} description"),
        product_type: product_type.to_string(),
    };
    ProductRepo::create(pool, &input)
        .await
        .expect("product seeding should succeed")
}

/// Set an inventory level for a product by size label.
pub async fn set_inventory(pool: &PgPool, product_id: i64, label: &str, qty: i32) {
    let size = SizeRepo::find_by_label(pool, label)
        .await
        .expect("size lookup should succeed")
        .expect("size should be seeded");
    InventoryRepo::upsert(pool, product_id, size.id, qty)
        .await
        .expect("inventory upsert should succeed");
}

// ---------------------------------------------------------------------------
// Login helpers
// ---------------------------------------------------------------------------

/// Log a customer in via the API, returning the bearer token.
pub async fn login_customer(app: &Router, username: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/account/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("response must contain access_token")
        .to_string()
}

/// Log an employee in via the API, returning the bearer token.
pub async fn login_employee(app: &Router, username: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("response must contain access_token")
        .to_string()
}
