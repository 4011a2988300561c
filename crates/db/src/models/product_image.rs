//! Product image model.

use serde::Serialize;
use sqlx::FromRow;

use hemline_core::types::DbId;

/// An image row from the `product_images` table.
///
/// `path` is relative to the static file root; the API prefixes the
/// configured asset base URL when rendering responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductImage {
    pub id: DbId,
    pub product_id: DbId,
    pub path: String,
}
