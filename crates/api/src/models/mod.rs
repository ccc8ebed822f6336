//! Domain types for the marketplace.
//!
//! These are validated domain objects - the service layer only ever sees
//! values that already satisfy the entity invariants. Construction goes
//! through the `New*` types, whose constructors enforce field rules; loaded
//! entities are assembled by the repository layer from storage rows.

pub mod product;
pub mod report;
pub mod sale;
pub mod user;

pub use product::{NewProduct, Product, ProductSummary};
pub use report::{CommissionSummary, ReportFilters, SalesReport};
pub use sale::{NewSale, Sale, SaleWithDetails};
pub use user::{NewUser, User, UserSummary};

/// Errors from entity construction-time validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// User name is shorter than the minimum.
    #[error("name must be at least {min} characters")]
    NameTooShort {
        /// Minimum length after trimming.
        min: usize,
    },
    /// Product name is empty.
    #[error("product name cannot be empty")]
    EmptyProductName,
    /// Product price is below zero.
    #[error("price cannot be negative")]
    NegativePrice,
    /// Sale value is below zero.
    #[error("sale value cannot be negative")]
    NegativeValue,
}
