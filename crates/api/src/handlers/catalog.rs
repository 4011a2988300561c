//! Public catalog handlers: paginated listings and product detail.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use hemline_core::catalog::ProductType;
use hemline_core::error::CoreError;
use hemline_core::types::DbId;
use hemline_db::models::product::ProductListing;
use hemline_db::repositories::{InventoryRepo, ProductImageRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// Default storefront page size.
const DEFAULT_PAGE_SIZE: i64 = 12;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /products`.
///
/// Kept flat (no nested struct) because `serde_urlencoded` cannot flatten
/// numeric fields.
#[derive(Debug, Deserialize)]
pub struct ListProductsParams {
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListProductsParams {
    fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// One product in a listing.
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub product_type: String,
    /// Absolute URL of the first image, if any.
    pub image: Option<String>,
}

/// Response body for `GET /products`.
#[derive(Debug, Serialize)]
pub struct ProductPageResponse {
    pub products: Vec<ProductSummary>,
    /// Whether another page exists after this one.
    pub next_page: bool,
}

/// Response body for `GET /products/{slug}`.
#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub description: String,
    pub product_type: String,
    /// Absolute image URLs in upload order.
    pub images: Vec<String>,
    /// Size label -> in stock, from inventory levels.
    pub sizes_available: BTreeMap<String, bool>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/products?type=Shirt&page=1&per_page=12
///
/// One page of products of a type, newest additions last.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> AppResult<Json<ProductPageResponse>> {
    let (limit, offset) = params.pagination().resolve(DEFAULT_PAGE_SIZE)?;

    let type_str = params.product_type.as_str();
    let listings = ProductRepo::list_page_by_type(&state.pool, type_str, limit, offset).await?;
    let total = ProductRepo::count_by_type(&state.pool, type_str).await?;

    let products = listings
        .iter()
        .map(|l| listing_to_summary(&state, l))
        .collect();

    Ok(Json(ProductPageResponse {
        products,
        next_page: total > offset + limit,
    }))
}

/// GET /api/v1/products/{slug}
///
/// Full product detail with images and per-size availability.
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ProductDetailResponse>> {
    let product = ProductRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(product_not_found)?;

    let images = ProductImageRepo::list_by_product(&state.pool, product.id)
        .await?
        .iter()
        .map(|img| state.config.image_url(&img.path))
        .collect();

    let sizes_available = availability_map(&state, product.id).await?;

    Ok(Json(ProductDetailResponse {
        id: product.id,
        name: product.name,
        slug: product.slug,
        price: product.price,
        description: product.description,
        product_type: product.product_type,
        images,
        sizes_available,
    }))
}

// ---------------------------------------------------------------------------
// Helpers (shared with wishlist and cart handlers)
// ---------------------------------------------------------------------------

/// Size label -> in-stock flag for a product.
pub async fn availability_map(
    state: &AppState,
    product_id: DbId,
) -> AppResult<BTreeMap<String, bool>> {
    let rows = InventoryRepo::availability_for_product(&state.pool, product_id).await?;
    Ok(rows
        .into_iter()
        .map(|r| (r.label, r.quantity > 0))
        .collect())
}

/// Build a [`ProductSummary`] from a listing row, resolving the image URL.
pub fn listing_to_summary(state: &AppState, listing: &ProductListing) -> ProductSummary {
    ProductSummary {
        id: listing.id,
        name: listing.name.clone(),
        slug: listing.slug.clone(),
        price: listing.price,
        product_type: listing.product_type.clone(),
        image: listing.image_path.as_deref().map(|p| state.config.image_url(p)),
    }
}

/// 404 for product lookups by slug (no numeric id to report).
pub fn product_not_found() -> AppError {
    AppError::Core(CoreError::Missing("Product"))
}
