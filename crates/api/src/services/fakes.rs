//! In-memory repository implementations for service tests.
//!
//! One shared store implements all four ports so cross-entity lookups (sale
//! details, reports) resolve against the same data the test seeded.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use vendora_core::{Email, ProductId, SaleId, UserId, UserRole};

use crate::db::RepositoryError;
use crate::models::{
    NewProduct, NewSale, NewUser, Product, ProductSummary, ReportFilters, Sale, SaleWithDetails,
    User, UserSummary,
};
use crate::repository::{
    ProductRepository, ReportRepository, SaleRepository, SalesAggregate, UserRepository,
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    products: Vec<Product>,
    sales: Vec<Sale>,
}

/// Shared in-memory store implementing every repository port.
#[derive(Default)]
pub(crate) struct InMemoryDb {
    inner: Mutex<State>,
}

impl InMemoryDb {
    pub(crate) fn seed_user(&self, name: &str, email: &str, role: UserRole) -> UserId {
        let mut state = self.inner.lock().unwrap();
        let id = UserId::new(state.users.len() as i32 + 1);
        state.users.push(User {
            id,
            name: name.to_owned(),
            email: Email::parse(email).unwrap(),
            role,
            created_at: Utc::now(),
        });
        id
    }

    pub(crate) fn seed_product(&self, name: &str, price: Decimal, active: bool) -> ProductId {
        let mut state = self.inner.lock().unwrap();
        let id = ProductId::new(state.products.len() as i32 + 1);
        state.products.push(Product {
            id,
            name: name.to_owned(),
            price,
            active,
            created_at: Utc::now(),
        });
        id
    }

    pub(crate) fn seed_sale_at(
        &self,
        product_id: ProductId,
        customer_id: UserId,
        partner_id: UserId,
        value: Decimal,
        created_at: DateTime<Utc>,
    ) -> SaleId {
        let mut state = self.inner.lock().unwrap();
        let id = SaleId::new(state.sales.len() as i32 + 1);
        state.sales.push(Sale {
            id,
            product_id,
            customer_id,
            partner_id,
            value,
            created_at,
        });
        id
    }

    pub(crate) fn deactivate_product(&self, id: ProductId) {
        let mut state = self.inner.lock().unwrap();
        if let Some(product) = state.products.iter_mut().find(|p| p.id == id) {
            product.active = false;
        }
    }

    pub(crate) fn sale_count(&self) -> usize {
        self.inner.lock().unwrap().sales.len()
    }

    fn details(state: &State, sale: &Sale) -> Result<SaleWithDetails, RepositoryError> {
        let product = state
            .products
            .iter()
            .find(|p| p.id == sale.product_id)
            .ok_or_else(|| RepositoryError::DataCorruption("dangling product_id".to_owned()))?;
        let customer = state
            .users
            .iter()
            .find(|u| u.id == sale.customer_id)
            .ok_or_else(|| RepositoryError::DataCorruption("dangling customer_id".to_owned()))?;
        let partner = state
            .users
            .iter()
            .find(|u| u.id == sale.partner_id)
            .ok_or_else(|| RepositoryError::DataCorruption("dangling partner_id".to_owned()))?;

        Ok(SaleWithDetails {
            sale: sale.clone(),
            product: ProductSummary::from(product),
            customer: UserSummary::from(customer),
            partner: UserSummary::from(partner),
        })
    }

    /// Newest first, with the insertion order breaking timestamp ties.
    fn sorted_desc(mut sales: Vec<Sale>) -> Vec<Sale> {
        sales.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        sales
    }

    fn window<T>(items: Vec<T>, skip: i64, take: i64) -> Vec<T> {
        items
            .into_iter()
            .skip(usize::try_from(skip.max(0)).unwrap_or(0))
            .take(usize::try_from(take.max(0)).unwrap_or(0))
            .collect()
    }
}

#[async_trait]
impl UserRepository for InMemoryDb {
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut state = self.inner.lock().unwrap();
        if state.users.iter().any(|u| u.email == *user.email()) {
            return Err(RepositoryError::Conflict("email already registered".to_owned()));
        }
        let created = User {
            id: UserId::new(state.users.len() as i32 + 1),
            name: user.name().to_owned(),
            email: user.email().clone(),
            role: user.role(),
            created_at: Utc::now(),
        };
        state.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let state = self.inner.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let state = self.inner.lock().unwrap();
        Ok(state.users.iter().find(|u| u.email == *email).cloned())
    }

    async fn find_all(&self, skip: i64, take: i64) -> Result<Vec<User>, RepositoryError> {
        let mut users = self.inner.lock().unwrap().users.clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(Self::window(users, skip, take))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.inner.lock().unwrap().users.len() as i64)
    }
}

#[async_trait]
impl ProductRepository for InMemoryDb {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut state = self.inner.lock().unwrap();
        let created = Product {
            id: ProductId::new(state.products.len() as i32 + 1),
            name: product.name().to_owned(),
            price: product.price(),
            active: product.active(),
            created_at: Utc::now(),
        };
        state.products.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let state = self.inner.lock().unwrap();
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self, skip: i64, take: i64) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.inner.lock().unwrap().products.clone();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(Self::window(products, skip, take))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.inner.lock().unwrap().products.len() as i64)
    }
}

#[async_trait]
impl SaleRepository for InMemoryDb {
    async fn create(&self, sale: &NewSale) -> Result<Sale, RepositoryError> {
        let mut state = self.inner.lock().unwrap();
        let created = Sale {
            id: SaleId::new(state.sales.len() as i32 + 1),
            product_id: sale.product_id(),
            customer_id: sale.customer_id(),
            partner_id: sale.partner_id(),
            value: sale.value(),
            created_at: Utc::now(),
        };
        state.sales.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: SaleId) -> Result<Option<SaleWithDetails>, RepositoryError> {
        let state = self.inner.lock().unwrap();
        state
            .sales
            .iter()
            .find(|s| s.id == id)
            .map(|sale| Self::details(&state, sale))
            .transpose()
    }

    async fn find_all(
        &self,
        skip: i64,
        take: i64,
    ) -> Result<Vec<SaleWithDetails>, RepositoryError> {
        let state = self.inner.lock().unwrap();
        let sorted = Self::sorted_desc(state.sales.clone());
        Self::window(sorted, skip, take)
            .iter()
            .map(|sale| Self::details(&state, sale))
            .collect()
    }

    async fn find_by_partner(&self, partner_id: UserId) -> Result<Vec<Sale>, RepositoryError> {
        let state = self.inner.lock().unwrap();
        let own: Vec<Sale> = state
            .sales
            .iter()
            .filter(|s| s.partner_id == partner_id)
            .cloned()
            .collect();
        Ok(Self::sorted_desc(own))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.inner.lock().unwrap().sales.len() as i64)
    }
}

#[async_trait]
impl ReportRepository for InMemoryDb {
    async fn sales_report(
        &self,
        filters: &ReportFilters,
    ) -> Result<SalesAggregate, RepositoryError> {
        let state = self.inner.lock().unwrap();
        let matching: Vec<Sale> = state
            .sales
            .iter()
            .filter(|s| filters.start_date.is_none_or(|start| s.created_at >= start))
            .filter(|s| filters.end_date.is_none_or(|end| s.created_at <= end))
            .filter(|s| filters.partner_id.is_none_or(|p| s.partner_id == p))
            .cloned()
            .collect();

        let total_sales = matching.len() as i64;
        let total_value = matching.iter().map(|s| s.value).sum();
        let sales = Self::sorted_desc(matching)
            .iter()
            .map(|sale| Self::details(&state, sale))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SalesAggregate {
            sales,
            total_sales,
            total_value,
        })
    }
}
