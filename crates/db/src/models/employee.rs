//! Employee entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use hemline_core::types::{DbId, Timestamp};

/// Full employee row from the `employees` table.
///
/// Carries both hashes -- use [`EmployeeResponse`] for API output.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_no: String,
    pub is_disabled: bool,
    pub password_hash: String,
    pub token_hash: Option<String>,
    pub is_superuser: bool,
    pub is_admin: bool,
    pub is_staff: bool,
    pub role_id: Option<DbId>,
    pub registered_on: Timestamp,
    pub last_login: Timestamp,
}

impl Employee {
    /// Whether this employee may use the back office at all.
    pub fn has_staff_access(&self) -> bool {
        self.is_superuser || self.is_admin || self.is_staff
    }

    /// Whether this employee may manage employees, RBAC, and the catalog.
    pub fn has_admin_access(&self) -> bool {
        self.is_superuser || self.is_admin
    }

    /// Human-readable role labels, in privilege order.
    pub fn role_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.is_superuser {
            labels.push("superuser");
        }
        if self.is_admin {
            labels.push("admin");
        }
        if self.is_staff {
            labels.push("staff");
        }
        labels
    }
}

/// Safe employee representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Single display label: `"Admin"` outranks `"Staff"`.
    pub role: &'static str,
    pub role_id: Option<DbId>,
    pub is_disabled: bool,
}

impl From<&Employee> for EmployeeResponse {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            username: e.username.clone(),
            email: e.email.clone(),
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            role: if e.is_admin { "Admin" } else { "Staff" },
            role_id: e.role_id,
            is_disabled: e.is_disabled,
        }
    }
}

/// DTO for creating a new employee. New hires always start as plain staff.
#[derive(Debug)]
pub struct CreateEmployee {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_no: String,
    pub password_hash: String,
}
