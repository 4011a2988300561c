//! Handlers for catalog administration: products, images, and inventory.
//!
//! All operations require [`RequireAdmin`].

use std::collections::BTreeMap;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use hemline_core::catalog::ProductType;
use hemline_core::error::CoreError;
use hemline_core::slug::slugify;
use hemline_core::types::DbId;
use hemline_db::models::inventory::InventoryLevel;
use hemline_db::models::product::CreateProduct;
use hemline_db::repositories::{InventoryRepo, ProductImageRepo, ProductRepo, SizeRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::catalog::{listing_to_summary, ProductSummary};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Default admin listing page size.
const DEFAULT_PAGE_SIZE: i64 = 20;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/products`.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub product_type: ProductType,
}

/// Response body for `POST /admin/products`.
#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub id: DbId,
    pub slug: String,
}

/// Request body for `PUT /admin/products/{id}/inventory`:
/// size label -> quantity.
#[derive(Debug, Deserialize)]
pub struct UpdateInventoryRequest {
    pub levels: BTreeMap<String, i32>,
}

/// Query parameters for `GET /admin/products`.
///
/// Kept flat (no nested struct) because `serde_urlencoded` cannot flatten
/// numeric fields.
#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    pub name: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/products
///
/// Create a product. The slug is generated from the name; a name that
/// slugs to an existing slug maps to 409.
pub async fn create_product(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<CreateProductResponse>)> {
    if input.price <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Price must be positive".into(),
        )));
    }

    let slug = slugify(&input.name);
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Product name must contain at least one alphanumeric character".into(),
        )));
    }

    let create_dto = CreateProduct {
        name: input.name,
        slug,
        price: input.price,
        description: input.description,
        product_type: input.product_type.as_str().to_string(),
    };

    let product = ProductRepo::create(&state.pool, &create_dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            id: product.id,
            slug: product.slug,
        }),
    ))
}

/// POST /api/v1/admin/products/{id}/images
///
/// Multipart upload of one or more image files. Files are written under the
/// configured upload directory as `<product_id>_<filename>` and one image
/// row is recorded per file.
pub async fn upload_images(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    let upload_dir = state.config.upload_dir();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Upload directory error: {e}")))?;

    let mut stored_paths = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let Some(filename) = field.file_name().map(sanitize_filename) else {
            continue;
        };
        if filename.is_empty() {
            return Err(AppError::BadRequest("Invalid file name".into()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?;

        let relative_path = format!("{upload_dir}/{id}_{filename}");
        tokio::fs::write(&relative_path, &bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("File write error: {e}")))?;

        ProductImageRepo::create(&state.pool, id, &relative_path).await?;
        stored_paths.push(relative_path);
    }

    if stored_paths.is_empty() {
        return Err(AppError::BadRequest("No files in upload".into()));
    }

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "images": stored_paths })),
    ))
}

/// PUT /api/v1/admin/products/{id}/inventory
///
/// Replace stock levels from a size-label -> quantity map. Every label must
/// belong to the product type's size group.
pub async fn update_inventory(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInventoryRequest>,
) -> AppResult<Json<Vec<InventoryLevel>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    let product_type = ProductType::parse(&product.product_type)?;
    let group = product_type.size_group();

    for (label, qty) in &input.levels {
        if !group.contains(label) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Size {label} is not valid for {} products",
                product.product_type
            ))));
        }
        if *qty < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Quantities must not be negative".into(),
            )));
        }
    }

    let mut levels = Vec::with_capacity(input.levels.len());
    for (label, qty) in &input.levels {
        let size = SizeRepo::find_by_label(&state.pool, label)
            .await?
            .ok_or(AppError::Core(CoreError::Missing("Size")))?;
        levels.push(InventoryRepo::upsert(&state.pool, id, size.id, *qty).await?);
    }

    Ok(Json(levels))
}

/// GET /api/v1/admin/products?page=&per_page=&name=
///
/// One page of products across all types, optionally filtered by name
/// substring (case-insensitive).
pub async fn list_products(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<AdminListParams>,
) -> AppResult<Json<Vec<ProductSummary>>> {
    let pagination = PaginationParams {
        page: params.page,
        per_page: params.per_page,
    };
    let (limit, offset) = pagination.resolve(DEFAULT_PAGE_SIZE)?;

    let listings =
        ProductRepo::search_page(&state.pool, params.name.as_deref(), limit, offset).await?;

    let products = listings
        .iter()
        .map(|l| listing_to_summary(&state, l))
        .collect();
    Ok(Json(products))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Strip path separators and shell-unfriendly characters from an uploaded
/// file name.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect()
}
