//! Product entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use hemline_core::types::DbId;

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    /// Whole currency units.
    pub price: i64,
    pub description: String,
    /// Serialized [`hemline_core::catalog::ProductType`].
    pub product_type: String,
}

/// DTO for creating a new product. The slug is generated by the handler.
#[derive(Debug)]
pub struct CreateProduct {
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub description: String,
    pub product_type: String,
}

/// Listing row for storefront and admin pages: the product plus its first
/// image path (if any).
#[derive(Debug, Clone, FromRow)]
pub struct ProductListing {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub product_type: String,
    pub image_path: Option<String>,
}
