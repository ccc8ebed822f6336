//! Persistence ports between the service layer and the storage engine.
//!
//! Services depend on these traits only; the Postgres adapters live in
//! [`crate::db`]. Any storage engine offering exact-match filters, a range
//! filter on a timestamp, a sum aggregate and a count can back them. Tests
//! substitute in-memory implementations.

use async_trait::async_trait;
use rust_decimal::Decimal;
use vendora_core::{Email, ProductId, SaleId, UserId};

use crate::db::RepositoryError;
use crate::models::{NewProduct, NewSale, NewUser, Product, ReportFilters, Sale, SaleWithDetails, User};

/// Port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with its assigned ID.
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// Look up a user by ID.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Look up a user by email, for the uniqueness check on creation.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// List users, newest first.
    async fn find_all(&self, skip: i64, take: i64) -> Result<Vec<User>, RepositoryError>;

    /// Total number of users.
    async fn count(&self) -> Result<i64, RepositoryError>;
}

/// Port for product persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return it with its assigned ID.
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;

    /// Look up a product by ID.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// List products, newest first. Inactive products are included.
    async fn find_all(&self, skip: i64, take: i64) -> Result<Vec<Product>, RepositoryError>;

    /// Total number of products.
    async fn count(&self) -> Result<i64, RepositoryError>;
}

/// Port for sale persistence. Sales are append-only: there is no update or
/// delete operation, by design.
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Insert a new sale and return it with its assigned ID.
    async fn create(&self, sale: &NewSale) -> Result<Sale, RepositoryError>;

    /// Look up a sale by ID, with product/customer/partner identities
    /// resolved.
    async fn find_by_id(&self, id: SaleId) -> Result<Option<SaleWithDetails>, RepositoryError>;

    /// List sales with resolved identities, newest first.
    async fn find_all(&self, skip: i64, take: i64)
    -> Result<Vec<SaleWithDetails>, RepositoryError>;

    /// All sales attributed to one partner, lifetime.
    async fn find_by_partner(&self, partner_id: UserId) -> Result<Vec<Sale>, RepositoryError>;

    /// Total number of sales.
    async fn count(&self) -> Result<i64, RepositoryError>;
}

/// Filtered rows and aggregates backing one sales report.
#[derive(Debug, Clone)]
pub struct SalesAggregate {
    /// The filtered sales, `created_at` descending, with resolved
    /// identities.
    pub sales: Vec<SaleWithDetails>,
    /// Count over the same filtered set.
    pub total_sales: i64,
    /// Value sum over the same filtered set.
    pub total_value: Decimal,
}

/// Port for the report-specific filtered aggregate query.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Fetch the sales matching `filters` together with their count and
    /// value sum.
    async fn sales_report(&self, filters: &ReportFilters)
    -> Result<SalesAggregate, RepositoryError>;
}
