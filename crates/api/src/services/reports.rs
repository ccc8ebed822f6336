//! Sales report service.

use std::sync::Arc;

use tracing::instrument;

use crate::error::AppError;
use crate::models::{ReportFilters, SalesReport};
use crate::repository::ReportRepository;

/// Service producing date/partner filtered sales reports.
#[derive(Clone)]
pub struct ReportService {
    reports: Arc<dyn ReportRepository>,
}

impl ReportService {
    /// Create a new report service.
    #[must_use]
    pub fn new(reports: Arc<dyn ReportRepository>) -> Self {
        Self { reports }
    }

    /// Build the sales report for one filter set.
    ///
    /// Bounds are inclusive and combine with AND; omitting every filter
    /// returns the full sale history. Sales come back newest first - the
    /// ordering is part of the contract, reports are presented
    /// chronologically. The report is unpaginated: `total_value` sums
    /// exactly the returned set.
    ///
    /// An unknown `partner_id` is not an error here (unlike commissions);
    /// it simply selects nothing.
    #[instrument(skip(self))]
    pub async fn sales_report(&self, filters: ReportFilters) -> Result<SalesReport, AppError> {
        let aggregate = self.reports.sales_report(&filters).await?;

        Ok(SalesReport {
            total_sales: aggregate.total_sales,
            total_value: aggregate.total_value,
            filters,
            sales: aggregate.sales,
        })
    }
}
