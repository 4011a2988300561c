//! Repository for the `customers` table.

use sqlx::PgPool;

use hemline_core::types::DbId;

use crate::models::address::{CreateAddress, CustomerAddress};
use crate::models::customer::{CreateCustomer, Customer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, first_name, last_name, phone_no, is_disabled, \
                        password_hash, token_hash, delivery_address_id, registered_on, last_login";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Sign up a new customer with their first address.
    ///
    /// Inserts the customer and the address, and marks the address as the
    /// delivery address, all in one transaction. A duplicate username or
    /// email surfaces as a unique-constraint error.
    pub async fn signup(
        pool: &PgPool,
        input: &CreateCustomer,
        address: &CreateAddress,
    ) -> Result<Customer, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let customer_id: DbId = sqlx::query_scalar(
            "INSERT INTO customers (username, email, first_name, last_name, phone_no, password_hash)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.phone_no)
        .bind(&input.password_hash)
        .fetch_one(&mut *tx)
        .await?;

        let address: CustomerAddress = sqlx::query_as(
            "INSERT INTO customer_addresses (customer_id, name, phone_no, address, city, state, pin_code)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, customer_id, name, phone_no, address, city, state, pin_code",
        )
        .bind(customer_id)
        .bind(&address.name)
        .bind(&address.phone_no)
        .bind(&address.address)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.pin_code)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE customers SET delivery_address_id = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let customer = sqlx::query_as::<_, Customer>(&query)
            .bind(customer_id)
            .bind(address.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(customer)
    }

    /// Find a customer by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a customer by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE username = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Record a successful login: store the new token digest and stamp
    /// `last_login`.
    pub async fn record_login(
        pool: &PgPool,
        id: DbId,
        token_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE customers SET token_hash = $2, last_login = NOW() WHERE id = $1")
            .bind(id)
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Clear the stored token digest, revoking the active session.
    pub async fn clear_token(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE customers SET token_hash = NULL WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Select the delivery address. Returns `false` if no row was updated.
    pub async fn set_delivery_address(
        pool: &PgPool,
        id: DbId,
        address_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE customers SET delivery_address_id = $2 WHERE id = $1")
            .bind(id)
            .bind(address_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
