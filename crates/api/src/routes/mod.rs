//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /ready                     - Readiness check (pings the database)
//!
//! # Users
//! POST /users                     - Create user
//! GET  /users                     - List users (paginated)
//! GET  /users/{id}                - User by ID
//!
//! # Products
//! POST /products                  - Create product
//! GET  /products                  - List products (paginated)
//! GET  /products/{id}             - Product by ID
//!
//! # Sales
//! POST /sales                     - Record sale
//! GET  /sales                     - List sales with details (paginated)
//! GET  /sales/{id}                - Sale by ID with details
//!
//! # Partners
//! GET  /partners/{id}/commissions - Partner commission figures
//!
//! # Reports
//! GET  /reports/sales             - Filtered sales report
//!                                   (?startDate&endDate&partnerId)
//!
//! # Docs
//! GET  /api/docs/openapi.json     - OpenAPI 3 document
//! ```
//!
//! Handlers parse and coerce raw request data, call a service, and shape the
//! result into an explicit response DTO; no business rule lives here.

pub mod docs;
pub mod partners;
pub mod products;
pub mod reports;
pub mod sales;
pub mod users;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use serde::Deserialize;
use utoipa::IntoParams;
use vendora_core::{DEFAULT_LIMIT, DEFAULT_PAGE};

use crate::state::AppState;

/// Build the full API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(products::router())
        .merge(sales::router())
        .merge(partners::router())
        .merge(reports::router())
        .merge(docs::router())
        .route("/health", get(health))
        .route("/ready", get(readiness))
}

/// Pagination query accepted by every list endpoint.
///
/// Values arrive as raw strings; malformed or non-positive input never fails
/// the request, it silently falls back to the defaults.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number (default 1).
    pub page: Option<String>,
    /// Items per page (default 10).
    pub limit: Option<String>,
}

impl ListQuery {
    /// Resolve the effective page and limit, clamping malformed input.
    #[must_use]
    pub fn page_and_limit(&self) -> (i64, i64) {
        let page = self
            .page
            .as_deref()
            .and_then(|s| s.parse().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let limit = self
            .limit
            .as_deref()
            .and_then(|s| s.parse().ok())
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_LIMIT);
        (page, limit)
    }
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
