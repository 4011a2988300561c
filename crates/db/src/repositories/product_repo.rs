//! Repository for the `products` table.

use sqlx::PgPool;

use hemline_core::types::DbId;

use crate::models::product::{CreateProduct, Product, ProductListing};

const COLUMNS: &str = "id, name, slug, price, description, product_type";

/// Listing columns: product summary plus the first image path.
const LISTING_COLUMNS: &str = "p.id, p.name, p.slug, p.price, p.product_type, \
    (SELECT i.path FROM product_images i WHERE i.product_id = p.id ORDER BY i.id ASC LIMIT 1) AS image_path";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row. A duplicate slug
    /// surfaces as a unique-constraint error.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, slug, price, description, product_type)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.price)
            .bind(&input.description)
            .bind(&input.product_type)
            .fetch_one(pool)
            .await
    }

    /// Find a product by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a product by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE slug = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// One storefront page of products of a type, with first image paths.
    pub async fn list_page_by_type(
        pool: &PgPool,
        product_type: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProductListing>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING_COLUMNS} FROM products p
             WHERE p.product_type = $1
             ORDER BY p.id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ProductListing>(&query)
            .bind(product_type)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count products of a type, for next-page detection.
    pub async fn count_by_type(pool: &PgPool, product_type: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE product_type = $1")
            .bind(product_type)
            .fetch_one(pool)
            .await
    }

    /// One admin page of products across all types, optionally filtered by
    /// a case-insensitive name substring.
    pub async fn search_page(
        pool: &PgPool,
        name_filter: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProductListing>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING_COLUMNS} FROM products p
             WHERE ($1::text IS NULL OR p.name ILIKE '%' || $1 || '%')
             ORDER BY p.id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ProductListing>(&query)
            .bind(name_filter)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
