//! OpenAPI document endpoint.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// OpenAPI description of the marketplace API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vendora API",
        description = "Marketplace/affiliate API: partners, products, sales and commissions",
    ),
    paths(
        super::users::create_user,
        super::users::list_users,
        super::users::get_user,
        super::products::create_product,
        super::products::list_products,
        super::products::get_product,
        super::sales::create_sale,
        super::sales::list_sales,
        super::sales::get_sale,
        super::partners::get_commissions,
        super::reports::get_sales_report,
    ),
    components(schemas(
        super::users::CreateUserRequest,
        super::users::UserResponse,
        super::users::UserListResponse,
        super::products::CreateProductRequest,
        super::products::ProductResponse,
        super::products::ProductListResponse,
        super::sales::CreateSaleRequest,
        super::sales::SaleResponse,
        super::sales::SaleDetailResponse,
        super::sales::SaleListResponse,
        super::sales::ProductSummaryResponse,
        super::sales::UserSummaryResponse,
        super::partners::CommissionResponse,
        super::reports::SalesReportResponse,
        super::reports::ReportSaleResponse,
        super::reports::ReportFiltersResponse,
    )),
    tags(
        (name = "users", description = "User management"),
        (name = "products", description = "Product catalog"),
        (name = "sales", description = "Sale recording and history"),
        (name = "partners", description = "Partner commissions"),
        (name = "reports", description = "Sales reports"),
    ),
)]
struct ApiDoc;

/// Build the docs router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/docs/openapi.json", get(openapi_json))
}

/// Serve the OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
