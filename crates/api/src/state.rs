//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ApiConfig;
use crate::db::{PgProductRepository, PgReportRepository, PgSaleRepository, PgUserRepository};
use crate::repository::{ProductRepository, ReportRepository, SaleRepository, UserRepository};
use crate::services::{PartnerService, ProductService, ReportService, SaleService, UserService};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Owns the configuration, the connection pool
/// and the service graph; repositories are wired to Postgres here and
/// nowhere else, so every other layer stays storage-agnostic.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
    users: UserService,
    products: ProductService,
    sales: SaleService,
    partners: PartnerService,
    reports: ReportService,
}

impl AppState {
    /// Wire the full service graph over a connection pool.
    #[must_use]
    pub fn new(config: ApiConfig, pool: PgPool) -> Self {
        let user_repo: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
        let product_repo: Arc<dyn ProductRepository> =
            Arc::new(PgProductRepository::new(pool.clone()));
        let sale_repo: Arc<dyn SaleRepository> = Arc::new(PgSaleRepository::new(pool.clone()));
        let report_repo: Arc<dyn ReportRepository> =
            Arc::new(PgReportRepository::new(pool.clone()));

        let users = UserService::new(Arc::clone(&user_repo));
        let products = ProductService::new(Arc::clone(&product_repo));
        let sales = SaleService::new(
            Arc::clone(&sale_repo),
            Arc::clone(&user_repo),
            Arc::clone(&product_repo),
        );
        let partners = PartnerService::new(
            Arc::clone(&user_repo),
            Arc::clone(&sale_repo),
            config.commission_rate,
        );
        let reports = ReportService::new(report_repo);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                users,
                products,
                sales,
                partners,
                reports,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// User management service.
    #[must_use]
    pub fn users(&self) -> &UserService {
        &self.inner.users
    }

    /// Product catalog service.
    #[must_use]
    pub fn products(&self) -> &ProductService {
        &self.inner.products
    }

    /// Sale transaction service.
    #[must_use]
    pub fn sales(&self) -> &SaleService {
        &self.inner.sales
    }

    /// Partner commission service.
    #[must_use]
    pub fn partners(&self) -> &PartnerService {
        &self.inner.partners
    }

    /// Sales report service.
    #[must_use]
    pub fn reports(&self) -> &ReportService {
        &self.inner.reports
    }
}
