//! Repository for the `customer_addresses` table.

use sqlx::PgPool;

use hemline_core::types::DbId;

use crate::models::address::{CreateAddress, CustomerAddress};

const COLUMNS: &str = "id, customer_id, name, phone_no, address, city, state, pin_code";

/// Provides CRUD operations for customer addresses.
pub struct AddressRepo;

impl AddressRepo {
    /// Insert a new address for a customer, returning the created row.
    pub async fn create(
        pool: &PgPool,
        customer_id: DbId,
        input: &CreateAddress,
    ) -> Result<CustomerAddress, sqlx::Error> {
        let query = format!(
            "INSERT INTO customer_addresses (customer_id, name, phone_no, address, city, state, pin_code)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerAddress>(&query)
            .bind(customer_id)
            .bind(&input.name)
            .bind(&input.phone_no)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.pin_code)
            .fetch_one(pool)
            .await
    }

    /// List a customer's addresses, oldest first.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<CustomerAddress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM customer_addresses WHERE customer_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, CustomerAddress>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// Find an address only if it belongs to the given customer.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        customer_id: DbId,
    ) -> Result<Option<CustomerAddress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM customer_addresses WHERE id = $1 AND customer_id = $2"
        );
        sqlx::query_as::<_, CustomerAddress>(&query)
            .bind(id)
            .bind(customer_id)
            .fetch_optional(pool)
            .await
    }

    /// Count a customer's saved addresses.
    pub async fn count_by_customer(pool: &PgPool, customer_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM customer_addresses WHERE customer_id = $1")
            .bind(customer_id)
            .fetch_one(pool)
            .await
    }
}
