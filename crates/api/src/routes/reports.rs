//! Sales report endpoints.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use vendora_core::UserId;

use super::sales::{ProductSummaryResponse, UserSummaryResponse};
use crate::error::AppError;
use crate::models::{ReportFilters, SaleWithDetails, SalesReport};
use crate::state::AppState;

/// Build the reports router.
pub fn router() -> Router<AppState> {
    Router::new().route("/reports/sales", get(get_sales_report))
}

/// Query parameters narrowing the report.
///
/// Dates accept RFC 3339 timestamps or plain `YYYY-MM-DD` (interpreted as
/// midnight UTC). All parameters are optional and combine with AND.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// Keep sales created at or after this instant.
    pub start_date: Option<String>,
    /// Keep sales created at or before this instant.
    pub end_date: Option<String>,
    /// Keep sales attributed to this partner.
    pub partner_id: Option<String>,
}

impl ReportQuery {
    /// Coerce the raw query strings into domain filters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for unparseable dates or a
    /// non-numeric partner ID. Unlike page/limit, these do not default
    /// silently - a mistyped filter would otherwise return a misleading
    /// report.
    pub fn to_filters(&self) -> Result<ReportFilters, AppError> {
        let start_date = self
            .start_date
            .as_deref()
            .map(|raw| parse_date_param("startDate", raw))
            .transpose()?;
        let end_date = self
            .end_date
            .as_deref()
            .map(|raw| parse_date_param("endDate", raw))
            .transpose()?;
        let partner_id = self
            .partner_id
            .as_deref()
            .map(|raw| {
                raw.parse::<i32>().map(UserId::new).map_err(|_| {
                    AppError::Validation(format!("invalid partnerId: {raw}"))
                })
            })
            .transpose()?;

        Ok(ReportFilters {
            start_date,
            end_date,
            partner_id,
        })
    }
}

/// Parse one date query parameter: RFC 3339, or a plain date at midnight
/// UTC.
fn parse_date_param(name: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(AppError::Validation(format!("invalid {name}: {value}")))
}

/// The filters a report was computed with, echoed back verbatim.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportFiltersResponse {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub partner_id: Option<i32>,
}

/// One sale inside a report: the captured value plus identity summaries
/// only, never the full related entities.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSaleResponse {
    pub id: i32,
    #[schema(value_type = String, example = "100.00")]
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
    pub product: ProductSummaryResponse,
    pub customer: UserSummaryResponse,
    pub partner: UserSummaryResponse,
}

impl From<SaleWithDetails> for ReportSaleResponse {
    fn from(details: SaleWithDetails) -> Self {
        Self {
            id: details.sale.id.as_i32(),
            value: details.sale.value,
            created_at: details.sale.created_at,
            product: details.product.into(),
            customer: details.customer.into(),
            partner: details.partner.into(),
        }
    }
}

/// The aggregated sales report.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportResponse {
    pub total_sales: i64,
    #[schema(value_type = String, example = "200.00")]
    pub total_value: Decimal,
    pub filters: ReportFiltersResponse,
    pub sales: Vec<ReportSaleResponse>,
}

impl SalesReportResponse {
    /// Shape a report for the wire, echoing the caller's raw filter
    /// strings.
    fn new(report: SalesReport, query: &ReportQuery) -> Self {
        Self {
            total_sales: report.total_sales,
            total_value: report.total_value,
            filters: ReportFiltersResponse {
                start_date: query.start_date.clone(),
                end_date: query.end_date.clone(),
                partner_id: report.filters.partner_id.map(|id| id.as_i32()),
            },
            sales: report.sales.into_iter().map(Into::into).collect(),
        }
    }
}

/// Build a date/partner filtered sales report.
#[utoipa::path(
    get,
    path = "/reports/sales",
    tag = "reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "The aggregated report", body = SalesReportResponse),
        (status = 400, description = "Unparseable date or partner ID"),
    ),
)]
pub async fn get_sales_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<SalesReportResponse>, AppError> {
    let filters = query.to_filters()?;
    let report = state.reports().sales_report(filters).await?;
    Ok(Json(SalesReportResponse::new(report, &query)))
}
