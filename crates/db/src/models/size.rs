//! Size vocabulary model.

use serde::Serialize;
use sqlx::FromRow;

use hemline_core::types::DbId;

/// A size row from the seeded `sizes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Size {
    pub id: DbId,
    pub label: String,
}
