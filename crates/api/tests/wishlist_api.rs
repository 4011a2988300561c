//! HTTP-level integration tests for the wishlist.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{
    body_json, delete_auth, get_auth, login_customer, post_json_auth, seed_customer, seed_product,
    set_inventory,
};

/// Adding a product succeeds once and conflicts on repeat.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_and_duplicate(pool: PgPool) {
    seed_customer(&pool, "wisher").await;
    seed_product(&pool, "Oxford Shirt", "Shirt", 1299).await;
    let app = common::build_test_app(pool);
    let token = login_customer(&app, "wisher").await;

    let body = serde_json::json!({ "slug": "oxford-shirt" });
    let response = post_json_auth(&app, "/api/v1/wishlist/items", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(&app, "/api/v1/wishlist/items", body, &token).await;
    assert_eq!(
        response.status(),
        StatusCode::CONFLICT,
        "duplicate wishlist pair must conflict"
    );
}

/// Adding an unknown product maps to 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_unknown_product(pool: PgPool) {
    seed_customer(&pool, "wisher").await;
    let app = common::build_test_app(pool);
    let token = login_customer(&app, "wisher").await;

    let body = serde_json::json!({ "slug": "no-such-product" });
    let response = post_json_auth(&app, "/api/v1/wishlist/items", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Listing returns product summaries with availability.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list(pool: PgPool) {
    seed_customer(&pool, "wisher").await;
    let product = seed_product(&pool, "Oxford Shirt", "Shirt", 1299).await;
    set_inventory(&pool, product.id, "m", 2).await;
    let app = common::build_test_app(pool);
    let token = login_customer(&app, "wisher").await;

    let body = serde_json::json!({ "slug": "oxford-shirt" });
    post_json_auth(&app, "/api/v1/wishlist/items", body, &token).await;

    let response = get_auth(&app, "/api/v1/wishlist", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["slug"], "oxford-shirt");
    assert_eq!(entries[0]["price"], 1299);
    assert_eq!(entries[0]["available_sizes"]["m"], true);
}

/// Membership probe: 200 when present, 404 when not.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contains(pool: PgPool) {
    seed_customer(&pool, "wisher").await;
    seed_product(&pool, "Oxford Shirt", "Shirt", 1299).await;
    let app = common::build_test_app(pool);
    let token = login_customer(&app, "wisher").await;

    let response = get_auth(&app, "/api/v1/wishlist/contains/oxford-shirt", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = serde_json::json!({ "slug": "oxford-shirt" });
    post_json_auth(&app, "/api/v1/wishlist/items", body, &token).await;

    let response = get_auth(&app, "/api/v1/wishlist/contains/oxford-shirt", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["in_wishlist"], true);
}

/// Removing works once and 404s when already gone.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove(pool: PgPool) {
    seed_customer(&pool, "wisher").await;
    seed_product(&pool, "Oxford Shirt", "Shirt", 1299).await;
    let app = common::build_test_app(pool);
    let token = login_customer(&app, "wisher").await;

    let body = serde_json::json!({ "slug": "oxford-shirt" });
    post_json_auth(&app, "/api/v1/wishlist/items", body, &token).await;

    let response = delete_auth(&app, "/api/v1/wishlist/items/oxford-shirt", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(&app, "/api/v1/wishlist/items/oxford-shirt", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Moving to cart deletes the wishlist entry and creates the cart line.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_move_to_cart(pool: PgPool) {
    seed_customer(&pool, "mover").await;
    seed_product(&pool, "Oxford Shirt", "Shirt", 1299).await;
    let app = common::build_test_app(pool);
    let token = login_customer(&app, "mover").await;

    let body = serde_json::json!({ "slug": "oxford-shirt" });
    post_json_auth(&app, "/api/v1/wishlist/items", body, &token).await;

    let body = serde_json::json!({ "slug": "oxford-shirt", "size": "m", "qty": 2 });
    let response = post_json_auth(&app, "/api/v1/wishlist/move-to-cart", body, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Wishlist entry is gone.
    let response = get_auth(&app, "/api/v1/wishlist/contains/oxford-shirt", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Cart line exists.
    let response = get_auth(&app, "/api/v1/cart/summary", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["items"][0]["slug"], "oxford-shirt");
    assert_eq!(json["items"][0]["qty"], 2);
}

/// Moving merges into an existing cart line and clamps at the cap.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_move_to_cart_clamps(pool: PgPool) {
    seed_customer(&pool, "mover").await;
    seed_product(&pool, "Oxford Shirt", "Shirt", 1299).await;
    let app = common::build_test_app(pool);
    let token = login_customer(&app, "mover").await;

    let body = serde_json::json!({ "slug": "oxford-shirt", "size": "m", "qty": 8 });
    post_json_auth(&app, "/api/v1/cart/items", body, &token).await;

    let body = serde_json::json!({ "slug": "oxford-shirt" });
    post_json_auth(&app, "/api/v1/wishlist/items", body, &token).await;

    let body = serde_json::json!({ "slug": "oxford-shirt", "size": "m", "qty": 5 });
    let response = post_json_auth(&app, "/api/v1/wishlist/move-to-cart", body, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(&app, "/api/v1/cart/summary", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["items"][0]["qty"], 10, "merged quantity clamps at 10");
}

/// Moving a product that is not wishlisted maps to 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_move_to_cart_not_in_wishlist(pool: PgPool) {
    seed_customer(&pool, "mover").await;
    seed_product(&pool, "Oxford Shirt", "Shirt", 1299).await;
    let app = common::build_test_app(pool);
    let token = login_customer(&app, "mover").await;

    let body = serde_json::json!({ "slug": "oxford-shirt", "size": "m", "qty": 1 });
    let response = post_json_auth(&app, "/api/v1/wishlist/move-to-cart", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
