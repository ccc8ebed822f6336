//! Product catalog service.

use std::sync::Arc;

use tracing::{info, instrument};
use vendora_core::{ProductId, paginate};

use super::PagedResult;
use crate::error::AppError;
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

/// Service for creating and listing catalog products.
#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new product service.
    #[must_use]
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Add a product to the catalog.
    #[instrument(skip(self, product))]
    pub async fn create(&self, product: NewProduct) -> Result<Product, AppError> {
        let created = self.products.create(&product).await?;
        info!(product_id = %created.id, "product created");
        Ok(created)
    }

    /// List products, newest first. Inactive products are listed too - they
    /// only reject new sales.
    pub async fn find_all(&self, page: i64, limit: i64) -> Result<PagedResult<Product>, AppError> {
        let total = self.products.count().await?;
        let pagination = paginate(page, limit, total);
        let data = self
            .products
            .find_all(pagination.skip, pagination.limit)
            .await?;
        Ok(PagedResult::new(data, total, pagination))
    }

    /// Fetch one product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the ID does not exist.
    pub async fn find_by_id(&self, id: ProductId) -> Result<Product, AppError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {id} not found")))
    }
}
