//! Report repository backed by `PostgreSQL`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::RepositoryError;
use super::sales::{SALE_DETAIL_COLUMNS, SALE_DETAIL_JOINS, SaleDetailRow};
use crate::models::ReportFilters;
use crate::repository::{ReportRepository, SalesAggregate};

/// Predicate shared by the row and aggregate queries. Each filter is
/// optional: a NULL bind disables its clause, so one static statement covers
/// every filter combination.
const REPORT_PREDICATE: &str = r"
    ($1::timestamptz IS NULL OR s.created_at >= $1)
    AND ($2::timestamptz IS NULL OR s.created_at <= $2)
    AND ($3::int4 IS NULL OR s.partner_id = $3)
";

/// Postgres implementation of the [`ReportRepository`] port.
#[derive(Debug, Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new report repository over a shared pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn sales_report(
        &self,
        filters: &ReportFilters,
    ) -> Result<SalesAggregate, RepositoryError> {
        let partner_id = filters.partner_id.map(|id| id.as_i32());

        let rows_sql = format!(
            "SELECT {SALE_DETAIL_COLUMNS} {SALE_DETAIL_JOINS} WHERE {REPORT_PREDICATE} ORDER BY s.created_at DESC"
        );
        let rows = sqlx::query_as::<_, SaleDetailRow>(&rows_sql)
            .bind(filters.start_date)
            .bind(filters.end_date)
            .bind(partner_id)
            .fetch_all(&self.pool)
            .await?;

        let totals_sql = format!(
            "SELECT COUNT(*), COALESCE(SUM(s.value), 0) FROM sales s WHERE {REPORT_PREDICATE}"
        );
        let (total_sales, total_value): (i64, Decimal) = sqlx::query_as(&totals_sql)
            .bind(filters.start_date)
            .bind(filters.end_date)
            .bind(partner_id)
            .fetch_one(&self.pool)
            .await?;

        let sales = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SalesAggregate {
            sales,
            total_sales,
            total_value,
        })
    }
}
