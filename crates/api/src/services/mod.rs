//! Business services - the marketplace core.
//!
//! Each service owns one slice of the domain and depends only on the
//! repository ports, never on the storage engine. Services validate
//! cross-entity preconditions, delegate persistence, and shape domain-level
//! results; request parsing and response formatting stay in the HTTP layer.

pub mod partners;
pub mod products;
pub mod reports;
pub mod sales;
pub mod users;

#[cfg(test)]
pub(crate) mod fakes;

pub use partners::PartnerService;
pub use products::ProductService;
pub use reports::ReportService;
pub use sales::SaleService;
pub use users::UserService;

use vendora_core::Pagination;

/// One page of a listing, together with the figures every list endpoint
/// returns.
#[derive(Debug, Clone)]
pub struct PagedResult<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl<T> PagedResult<T> {
    /// Assemble a page from its rows, the storage-level total and the
    /// resolved pagination window.
    #[must_use]
    pub const fn new(data: Vec<T>, total: i64, pagination: Pagination) -> Self {
        Self {
            data,
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: pagination.total_pages,
        }
    }
}
