//! Read-side aggregation types: partner commissions and sales reports.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use vendora_core::UserId;

use super::SaleWithDetails;

/// A partner's lifetime commission figures.
///
/// Pure function of the partner's current sale set: repeated calls with no
/// intervening sales yield identical output.
#[derive(Debug, Clone)]
pub struct CommissionSummary {
    pub partner_id: UserId,
    pub partner_name: String,
    /// Number of sales attributed to the partner.
    pub total_sales: i64,
    /// Sum of the captured values of those sales.
    pub total_value: Decimal,
    /// `total_value * commission_rate`, unrounded.
    pub total_commission: Decimal,
    /// The deployment-wide rate the commission was computed with.
    pub commission_rate: Decimal,
}

/// Optional constraints narrowing which sales a report aggregates.
///
/// All bounds are inclusive and combine with logical AND; an empty filter
/// set selects the full sale history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFilters {
    /// Keep sales with `created_at >= start_date`.
    pub start_date: Option<DateTime<Utc>>,
    /// Keep sales with `created_at <= end_date`.
    pub end_date: Option<DateTime<Utc>>,
    /// Keep sales attributed to this partner.
    pub partner_id: Option<UserId>,
}

impl ReportFilters {
    /// Whether no constraint is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.partner_id.is_none()
    }
}

/// The aggregated sales report for one filter set.
///
/// `sales` is the full filtered set (reports are unpaginated), ordered by
/// `created_at` descending; `total_value` sums the same filtered set.
#[derive(Debug, Clone)]
pub struct SalesReport {
    pub total_sales: i64,
    pub total_value: Decimal,
    pub filters: ReportFilters,
    pub sales: Vec<SaleWithDetails>,
}
