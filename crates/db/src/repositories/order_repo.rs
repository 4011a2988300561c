//! Repository for orders, order items, and captured payment details.

use sqlx::PgPool;

use hemline_core::order::OrderStatus;
use hemline_core::types::DbId;

use crate::models::order::{Order, OrderItemDetail, OrderLineAmounts};
use crate::models::payment::{CreatePaymentDetails, PaymentDetails};

const ORDER_COLUMNS: &str = "id, customer_id, order_number, status, delivery_address, placed_on";

const PAYMENT_COLUMNS: &str = "id, order_id, card_number, card_holder_name, expiry_month, \
                                expiry_year, cvv, billing_address";

/// Provides order placement and order history queries.
pub struct OrderRepo;

impl OrderRepo {
    /// Place an order from the customer's current cart, in one transaction:
    ///
    /// 1. insert the order row (sequential number, `Packing` status,
    ///    delivery address snapshot)
    /// 2. insert the captured payment details
    /// 3. copy every cart line into `order_items` with the current product
    ///    price as the unit-price snapshot
    /// 4. clear the cart
    ///
    /// Returns `None` (and changes nothing) if the cart is empty.
    pub async fn place_order(
        pool: &PgPool,
        customer_id: DbId,
        delivery_address: &serde_json::Value,
        payment: &CreatePaymentDetails,
    ) -> Result<Option<Order>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let cart_lines: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM cart_items WHERE customer_id = $1")
                .bind(customer_id)
                .fetch_one(&mut *tx)
                .await?;
        if cart_lines == 0 {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO orders (customer_id, status, delivery_address)
             VALUES ($1, $2, $3)
             RETURNING {ORDER_COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(customer_id)
            .bind(OrderStatus::Packing.as_str())
            .bind(delivery_address)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO payment_details
                (order_id, card_number, card_holder_name, expiry_month, expiry_year, cvv, billing_address)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(order.id)
        .bind(&payment.card_number)
        .bind(&payment.card_holder_name)
        .bind(&payment.expiry_month)
        .bind(&payment.expiry_year)
        .bind(&payment.cvv)
        .bind(&payment.billing_address)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, size_id, qty, unit_price)
             SELECT $1, c.product_id, c.size_id, c.qty, p.price
             FROM cart_items c
             JOIN products p ON p.id = c.product_id
             WHERE c.customer_id = $2",
        )
        .bind(order.id)
        .bind(customer_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM cart_items WHERE customer_id = $1")
            .bind(customer_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(order))
    }

    /// A customer's orders, newest first.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders
             WHERE customer_id = $1
             ORDER BY placed_on DESC, id DESC"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// Find an order by its customer-facing number, scoped to the customer.
    pub async fn find_by_order_number(
        pool: &PgPool,
        customer_id: DbId,
        order_number: i64,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders
             WHERE customer_id = $1 AND order_number = $2"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(customer_id)
            .bind(order_number)
            .fetch_optional(pool)
            .await
    }

    /// The (qty, unit_price) snapshots of an order's lines, for totals.
    pub async fn line_amounts(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Vec<OrderLineAmounts>, sqlx::Error> {
        sqlx::query_as::<_, OrderLineAmounts>(
            "SELECT qty, unit_price FROM order_items WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_all(pool)
        .await
    }

    /// An order's lines joined with product, size, and first image.
    pub async fn items_for_order(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Vec<OrderItemDetail>, sqlx::Error> {
        sqlx::query_as::<_, OrderItemDetail>(
            "SELECT oi.product_id, p.name, p.slug, p.product_type,
                    s.label AS size_label, oi.qty, oi.unit_price,
                    (SELECT i.path FROM product_images i
                     WHERE i.product_id = p.id ORDER BY i.id ASC LIMIT 1) AS image_path
             FROM order_items oi
             JOIN products p ON p.id = oi.product_id
             JOIN sizes s ON s.id = oi.size_id
             WHERE oi.order_id = $1
             ORDER BY oi.id ASC",
        )
        .bind(order_id)
        .fetch_all(pool)
        .await
    }

    /// The payment details captured with an order.
    pub async fn payment_for_order(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Option<PaymentDetails>, sqlx::Error> {
        let query = format!("SELECT {PAYMENT_COLUMNS} FROM payment_details WHERE order_id = $1");
        sqlx::query_as::<_, PaymentDetails>(&query)
            .bind(order_id)
            .fetch_optional(pool)
            .await
    }
}
