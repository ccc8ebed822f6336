//! Sale endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vendora_core::{ProductId, SaleId, UserId};

use super::ListQuery;
use crate::error::AppError;
use crate::models::{NewSale, ProductSummary, Sale, SaleWithDetails, UserSummary};
use crate::services::PagedResult;
use crate::state::AppState;

/// Build the sales router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sales", post(create_sale).get(list_sales))
        .route("/sales/{id}", get(get_sale))
}

/// Request body for recording a sale.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    /// Product being sold; must exist and be active.
    pub product_id: i32,
    /// Buyer; must reference a user with the CUSTOMER role.
    pub customer_id: i32,
    /// Commission earner; must reference a user with the PARTNER role.
    pub partner_id: i32,
    /// Transaction value to capture, zero or above. Stored verbatim, never
    /// recomputed from the product's current price.
    #[schema(value_type = String, example = "100.00")]
    pub value: Decimal,
}

/// A recorded sale, flat references only.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub id: i32,
    pub product_id: i32,
    pub customer_id: i32,
    pub partner_id: i32,
    #[schema(value_type = String, example = "100.00")]
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id.as_i32(),
            product_id: sale.product_id.as_i32(),
            customer_id: sale.customer_id.as_i32(),
            partner_id: sale.partner_id.as_i32(),
            value: sale.value,
            created_at: sale.created_at,
        }
    }
}

/// Product identity embedded in sale details and reports.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryResponse {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "149.90")]
    pub price: Decimal,
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(summary: ProductSummary) -> Self {
        Self {
            id: summary.id.as_i32(),
            name: summary.name,
            price: summary.price,
        }
    }
}

/// User identity embedded in sale details and reports.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id.as_i32(),
            name: summary.name,
            email: summary.email.into_inner(),
        }
    }
}

/// A sale with its related identities resolved.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetailResponse {
    pub id: i32,
    pub product_id: i32,
    pub customer_id: i32,
    pub partner_id: i32,
    #[schema(value_type = String, example = "100.00")]
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
    pub product: ProductSummaryResponse,
    pub customer: UserSummaryResponse,
    pub partner: UserSummaryResponse,
}

impl From<SaleWithDetails> for SaleDetailResponse {
    fn from(details: SaleWithDetails) -> Self {
        Self {
            id: details.sale.id.as_i32(),
            product_id: details.sale.product_id.as_i32(),
            customer_id: details.sale.customer_id.as_i32(),
            partner_id: details.sale.partner_id.as_i32(),
            value: details.sale.value,
            created_at: details.sale.created_at,
            product: details.product.into(),
            customer: details.customer.into(),
            partner: details.partner.into(),
        }
    }
}

/// One page of sales with details.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleListResponse {
    pub data: Vec<SaleDetailResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl From<PagedResult<SaleWithDetails>> for SaleListResponse {
    fn from(paged: PagedResult<SaleWithDetails>) -> Self {
        Self {
            data: paged.data.into_iter().map(Into::into).collect(),
            total: paged.total,
            page: paged.page,
            limit: paged.limit,
            total_pages: paged.total_pages,
        }
    }
}

/// Record a sale.
#[utoipa::path(
    post,
    path = "/sales",
    tag = "sales",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale recorded", body = SaleResponse),
        (status = 400, description = "Inactive product, role mismatch or negative value"),
        (status = 404, description = "Product, customer or partner not found"),
    ),
)]
pub async fn create_sale(
    State(state): State<AppState>,
    Json(body): Json<CreateSaleRequest>,
) -> Result<(StatusCode, Json<SaleResponse>), AppError> {
    let sale = NewSale::new(
        ProductId::new(body.product_id),
        UserId::new(body.customer_id),
        UserId::new(body.partner_id),
        body.value,
    )?;

    let created = state.sales().record_sale(sale).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List sales with details, newest first.
#[utoipa::path(
    get,
    path = "/sales",
    tag = "sales",
    params(ListQuery),
    responses((status = 200, description = "One page of sales", body = SaleListResponse)),
)]
pub async fn list_sales(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<SaleListResponse>, AppError> {
    let (page, limit) = query.page_and_limit();
    let paged = state.sales().find_all(page, limit).await?;
    Ok(Json(paged.into()))
}

/// Fetch a sale by ID, with details.
#[utoipa::path(
    get,
    path = "/sales/{id}",
    tag = "sales",
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "The sale", body = SaleDetailResponse),
        (status = 404, description = "No sale with that ID"),
    ),
)]
pub async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SaleDetailResponse>, AppError> {
    let sale = state.sales().find_by_id(SaleId::new(id)).await?;
    Ok(Json(sale.into()))
}
