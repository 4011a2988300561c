//! Repository-level integration tests for the customer shopping flow:
//! signup, cart merging, wishlist moves, and order placement.

use sqlx::PgPool;

use hemline_core::types::DbId;
use hemline_db::models::address::CreateAddress;
use hemline_db::models::customer::{CreateCustomer, Customer};
use hemline_db::models::payment::CreatePaymentDetails;
use hemline_db::models::product::CreateProduct;
use hemline_db::repositories::{
    CartRepo, CustomerRepo, OrderRepo, ProductRepo, SizeRepo, WishlistRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_customer(pool: &PgPool, username: &str) -> Customer {
    let customer = CreateCustomer {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        first_name: "Test".to_string(),
        last_name: "Customer".to_string(),
        phone_no: "9876543210".to_string(),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
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
        .expect("signup should succeed")
}

async fn seed_product(pool: &PgPool, name: &str, slug: &str, price: i64) -> DbId {
    ProductRepo::create(
        pool,
        &CreateProduct {
            name: name.to_string(),
            slug: slug.to_string(),
            price,
            description: String::new(),
            product_type: "Shirt".to_string(),
        },
    )
    .await
    .expect("product create should succeed")
    .id
}

async fn size_id(pool: &PgPool, label: &str) -> DbId {
    SizeRepo::find_by_label(pool, label)
        .await
        .expect("size lookup should succeed")
        .expect("size should be seeded")
        .id
}

fn payment() -> CreatePaymentDetails {
    CreatePaymentDetails {
        card_number: "4111111111111111".to_string(),
        card_holder_name: "Test Customer".to_string(),
        expiry_month: "07".to_string(),
        expiry_year: "2028".to_string(),
        cvv: "123".to_string(),
        billing_address: serde_json::json!({ "city": "Bengaluru" }),
    }
}

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

/// Signup creates the customer and address atomically and selects the
/// address for delivery.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_signup_creates_customer_with_delivery_address(pool: PgPool) {
    let customer = seed_customer(&pool, "fresh").await;

    assert!(customer.delivery_address_id.is_some());
    let addresses: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM customer_addresses WHERE customer_id = $1")
            .bind(customer.id)
            .fetch_one(&pool)
            .await
            .expect("count should succeed");
    assert_eq!(addresses, 1);
}

/// Duplicate usernames are rejected by the unique constraint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_signup_duplicate_username(pool: PgPool) {
    seed_customer(&pool, "dupe").await;

    let customer = CreateCustomer {
        username: "dupe".to_string(),
        email: "other@test.com".to_string(),
        first_name: "Test".to_string(),
        last_name: "Customer".to_string(),
        phone_no: "9876543210".to_string(),
        password_hash: "x".to_string(),
    };
    let address = CreateAddress {
        name: "Test".to_string(),
        phone_no: "9876543210".to_string(),
        address: "14 MG Road".to_string(),
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        pin_code: "560001".to_string(),
    };
    let result = CustomerRepo::signup(&pool, &customer, &address).await;
    assert!(result.is_err());

    let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(customers, 1, "failed signup must roll back entirely");
}

// ---------------------------------------------------------------------------
// Cart
// ---------------------------------------------------------------------------

/// add_or_merge inserts a line, then merges with the cap.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cart_merge_clamps(pool: PgPool) {
    let customer = seed_customer(&pool, "shopper").await;
    let product = seed_product(&pool, "Oxford Shirt", "oxford-shirt", 1000).await;
    let size = size_id(&pool, "m").await;

    let line = CartRepo::add_or_merge(&pool, customer.id, product, size, 6)
        .await
        .expect("add should succeed");
    assert_eq!(line.qty, 6);

    let line = CartRepo::add_or_merge(&pool, customer.id, product, size, 6)
        .await
        .expect("merge should succeed");
    assert_eq!(line.qty, 10, "merged quantity clamps at the cap");

    let lines = CartRepo::lines_for_customer(&pool, customer.id)
        .await
        .expect("listing should succeed");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].price, 1000);
    assert_eq!(lines[0].size_label, "m");
}

/// change_size rewrites or merges depending on the target line.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cart_change_size(pool: PgPool) {
    let customer = seed_customer(&pool, "shopper").await;
    let product = seed_product(&pool, "Oxford Shirt", "oxford-shirt", 1000).await;
    let m = size_id(&pool, "m").await;
    let l = size_id(&pool, "l").await;

    CartRepo::add_or_merge(&pool, customer.id, product, m, 4)
        .await
        .expect("add should succeed");

    // No line in the target size: plain rewrite.
    let changed = CartRepo::change_size(&pool, customer.id, product, m, l)
        .await
        .expect("change should succeed");
    assert!(changed);
    let lines = CartRepo::lines_for_customer(&pool, customer.id)
        .await
        .expect("listing should succeed");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].size_label, "l");

    // Existing target line: merge with clamp, source removed.
    CartRepo::add_or_merge(&pool, customer.id, product, m, 9)
        .await
        .expect("add should succeed");
    let changed = CartRepo::change_size(&pool, customer.id, product, m, l)
        .await
        .expect("change should succeed");
    assert!(changed);
    let lines = CartRepo::lines_for_customer(&pool, customer.id)
        .await
        .expect("listing should succeed");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].qty, 10);

    // Missing source line reports false.
    let changed = CartRepo::change_size(&pool, customer.id, product, m, l)
        .await
        .expect("change should succeed");
    assert!(!changed);
}

// ---------------------------------------------------------------------------
// Wishlist
// ---------------------------------------------------------------------------

/// The (customer, product) pair is unique.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wishlist_unique_pair(pool: PgPool) {
    let customer = seed_customer(&pool, "wisher").await;
    let product = seed_product(&pool, "Oxford Shirt", "oxford-shirt", 1000).await;

    WishlistRepo::add(&pool, customer.id, product)
        .await
        .expect("add should succeed");
    let duplicate = WishlistRepo::add(&pool, customer.id, product).await;
    assert!(duplicate.is_err(), "duplicate pair must be rejected");
}

/// move_to_cart removes the entry and merges into the cart atomically.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wishlist_move_to_cart(pool: PgPool) {
    let customer = seed_customer(&pool, "mover").await;
    let product = seed_product(&pool, "Oxford Shirt", "oxford-shirt", 1000).await;
    let size = size_id(&pool, "m").await;

    CartRepo::add_or_merge(&pool, customer.id, product, size, 8)
        .await
        .expect("add should succeed");
    WishlistRepo::add(&pool, customer.id, product)
        .await
        .expect("add should succeed");

    let moved = WishlistRepo::move_to_cart(&pool, customer.id, product, size, 5)
        .await
        .expect("move should succeed");
    assert!(moved);

    let entry = WishlistRepo::find(&pool, customer.id, product)
        .await
        .expect("lookup should succeed");
    assert!(entry.is_none(), "wishlist entry is consumed");

    let lines = CartRepo::lines_for_customer(&pool, customer.id)
        .await
        .expect("listing should succeed");
    assert_eq!(lines[0].qty, 10, "merge clamps at the cap");

    // Second move reports false and changes nothing.
    let moved = WishlistRepo::move_to_cart(&pool, customer.id, product, size, 1)
        .await
        .expect("move should succeed");
    assert!(!moved);
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// place_order snapshots the cart into order items, captures payment, and
/// clears the cart, all in one transaction.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_place_order_flow(pool: PgPool) {
    let customer = seed_customer(&pool, "buyer").await;
    let shirt = seed_product(&pool, "Oxford Shirt", "oxford-shirt", 1000).await;
    let linen = seed_product(&pool, "Linen Shirt", "linen-shirt", 750).await;
    let size = size_id(&pool, "m").await;

    CartRepo::add_or_merge(&pool, customer.id, shirt, size, 2)
        .await
        .expect("add should succeed");
    CartRepo::add_or_merge(&pool, customer.id, linen, size, 1)
        .await
        .expect("add should succeed");

    let delivery = serde_json::json!({ "city": "Bengaluru" });
    let order = OrderRepo::place_order(&pool, customer.id, &delivery, &payment())
        .await
        .expect("placement should succeed")
        .expect("cart was not empty");

    assert!(order.order_number >= 1001, "sequence starts at 1001");
    assert_eq!(order.status, "Packing");

    let amounts = OrderRepo::line_amounts(&pool, order.id)
        .await
        .expect("amounts should succeed");
    let mut pairs: Vec<(i32, i64)> = amounts.iter().map(|a| (a.qty, a.unit_price)).collect();
    pairs.sort_unstable();
    assert_eq!(pairs, vec![(1, 750), (2, 1000)], "prices are snapshotted");

    let cart_left = CartRepo::lines_for_customer(&pool, customer.id)
        .await
        .expect("listing should succeed");
    assert!(cart_left.is_empty(), "cart is cleared by checkout");

    let captured = OrderRepo::payment_for_order(&pool, order.id)
        .await
        .expect("payment lookup should succeed")
        .expect("payment row exists");
    assert_eq!(captured.card_last_four(), "1111");

    // Sequential numbering across orders.
    CartRepo::add_or_merge(&pool, customer.id, shirt, size, 1)
        .await
        .expect("add should succeed");
    let second = OrderRepo::place_order(&pool, customer.id, &delivery, &payment())
        .await
        .expect("placement should succeed")
        .expect("cart was not empty");
    assert_eq!(second.order_number, order.order_number + 1);
}

/// An empty cart yields no order and writes nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_place_order_empty_cart(pool: PgPool) {
    let customer = seed_customer(&pool, "buyer").await;

    let delivery = serde_json::json!({ "city": "Bengaluru" });
    let order = OrderRepo::place_order(&pool, customer.id, &delivery, &payment())
        .await
        .expect("call should succeed");
    assert!(order.is_none());

    let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(orders, 0);
}

/// Deleting a customer cascades addresses, cart, wishlist, and orders.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_customer_delete_cascades(pool: PgPool) {
    let customer = seed_customer(&pool, "leaver").await;
    let product = seed_product(&pool, "Oxford Shirt", "oxford-shirt", 1000).await;
    let size = size_id(&pool, "m").await;

    CartRepo::add_or_merge(&pool, customer.id, product, size, 1)
        .await
        .expect("add should succeed");
    WishlistRepo::add(&pool, customer.id, product)
        .await
        .expect("add should succeed");

    CartRepo::add_or_merge(&pool, customer.id, product, size, 1)
        .await
        .expect("add should succeed");
    OrderRepo::place_order(
        &pool,
        customer.id,
        &serde_json::json!({ "city": "Bengaluru" }),
        &payment(),
    )
    .await
    .expect("placement should succeed")
    .expect("cart was not empty");

    sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(customer.id)
        .execute(&pool)
        .await
        .expect("delete should succeed");

    for table in [
        "customer_addresses",
        "cart_items",
        "wishlist_items",
        "orders",
        "order_items",
        "payment_details",
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .expect("count should succeed");
        assert_eq!(count, 0, "{table} must cascade with the customer");
    }
}
