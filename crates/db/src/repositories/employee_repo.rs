//! Repository for the `employees` table.

use sqlx::PgPool;

use hemline_core::types::DbId;

use crate::models::employee::{CreateEmployee, Employee};

const COLUMNS: &str = "id, username, email, first_name, last_name, phone_no, is_disabled, \
                        password_hash, token_hash, is_superuser, is_admin, is_staff, role_id, \
                        registered_on, last_login";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new staff employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (username, email, first_name, last_name, phone_no, password_hash, is_staff)
             VALUES ($1, $2, $3, $4, $5, $6, TRUE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone_no)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an employee by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE username = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List all employees except superusers, oldest first.
    ///
    /// Superusers are bootstrap accounts and are not managed through the
    /// admin API.
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employees WHERE is_superuser = FALSE ORDER BY id ASC"
        );
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Enable or disable an employee. Returns `false` if no row matched.
    pub async fn set_disabled(
        pool: &PgPool,
        id: DbId,
        disabled: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE employees SET is_disabled = $2 WHERE id = $1")
            .bind(id)
            .bind(disabled)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Assign an RBAC role. Returns `false` if no row matched.
    pub async fn set_role(pool: &PgPool, id: DbId, role_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE employees SET role_id = $2 WHERE id = $1")
            .bind(id)
            .bind(role_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a successful login: store the new token digest and stamp
    /// `last_login`.
    pub async fn record_login(
        pool: &PgPool,
        id: DbId,
        token_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE employees SET token_hash = $2, last_login = NOW() WHERE id = $1")
            .bind(id)
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Clear the stored token digest, revoking the active session.
    pub async fn clear_token(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE employees SET token_hash = NULL WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
