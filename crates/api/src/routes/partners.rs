//! Partner commission endpoints.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use vendora_core::UserId;

use crate::error::AppError;
use crate::models::CommissionSummary;
use crate::state::AppState;

/// Build the partners router.
pub fn router() -> Router<AppState> {
    Router::new().route("/partners/{id}/commissions", get(get_commissions))
}

/// A partner's lifetime commission figures.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommissionResponse {
    pub partner_id: i32,
    pub partner_name: String,
    pub total_sales: i64,
    #[schema(value_type = String, example = "100.00")]
    pub total_value: Decimal,
    #[schema(value_type = String, example = "10.00")]
    pub total_commission: Decimal,
    #[schema(value_type = String, example = "0.10")]
    pub commission_rate: Decimal,
}

impl From<CommissionSummary> for CommissionResponse {
    fn from(summary: CommissionSummary) -> Self {
        Self {
            partner_id: summary.partner_id.as_i32(),
            partner_name: summary.partner_name,
            total_sales: summary.total_sales,
            total_value: summary.total_value,
            total_commission: summary.total_commission,
            commission_rate: summary.commission_rate,
        }
    }
}

/// Fetch a partner's commission figures.
#[utoipa::path(
    get,
    path = "/partners/{id}/commissions",
    tag = "partners",
    params(("id" = i32, Path, description = "Partner user ID")),
    responses(
        (status = 200, description = "Commission figures", body = CommissionResponse),
        (status = 400, description = "ID does not reference a partner"),
        (status = 404, description = "No user with that ID"),
    ),
)]
pub async fn get_commissions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CommissionResponse>, AppError> {
    let summary = state.partners().commissions(UserId::new(id)).await?;
    Ok(Json(summary.into()))
}
