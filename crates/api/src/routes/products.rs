//! Product endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vendora_core::ProductId;

use super::ListQuery;
use crate::error::AppError;
use crate::models::{NewProduct, Product};
use crate::services::PagedResult;
use crate::state::AppState;

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route("/products/{id}", get(get_product))
}

/// Request body for creating a product.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name, non-empty.
    pub name: String,
    /// List price, zero or above, as a decimal string (e.g. "149.90").
    #[schema(value_type = String, example = "149.90")]
    pub price: Decimal,
    /// Availability for new sales; defaults to true.
    pub active: Option<bool>,
}

/// A product as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "149.90")]
    pub price: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name,
            price: product.price,
            active: product.active,
            created_at: product.created_at,
        }
    }
}

/// One page of products.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub data: Vec<ProductResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl From<PagedResult<Product>> for ProductListResponse {
    fn from(paged: PagedResult<Product>) -> Self {
        Self {
            data: paged.data.into_iter().map(Into::into).collect(),
            total: paged.total,
            page: paged.page,
            limit: paged.limit,
            total_pages: paged.total_pages,
        }
    }
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Empty name or negative price"),
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let product = NewProduct::new(body.name, body.price, body.active)?;

    let created = state.products().create(product).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List products, newest first. Inactive products are included.
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(ListQuery),
    responses((status = 200, description = "One page of products", body = ProductListResponse)),
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProductListResponse>, AppError> {
    let (page, limit) = query.page_and_limit();
    let paged = state.products().find_all(page, limit).await?;
    Ok(Json(paged.into()))
}

/// Fetch a product by ID.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "No product with that ID"),
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.products().find_by_id(ProductId::new(id)).await?;
    Ok(Json(product.into()))
}
