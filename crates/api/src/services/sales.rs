//! Sale transaction service.
//!
//! Records sales after validating cross-entity preconditions against the
//! product catalog and the user base. Validation is fully read-only; only
//! after every check passes is the single insert issued.

use std::sync::Arc;

use tracing::{info, instrument};
use vendora_core::{SaleId, paginate};

use super::PagedResult;
use crate::error::AppError;
use crate::models::{NewSale, Sale, SaleWithDetails};
use crate::repository::{ProductRepository, SaleRepository, UserRepository};

/// Service recording and listing sales.
#[derive(Clone)]
pub struct SaleService {
    sales: Arc<dyn SaleRepository>,
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
}

impl SaleService {
    /// Create a new sale service.
    #[must_use]
    pub fn new(
        sales: Arc<dyn SaleRepository>,
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            sales,
            users,
            products,
        }
    }

    /// Record a sale.
    ///
    /// Preconditions are checked in a fixed order, each a distinct failure:
    /// product exists, product is active, customer exists, customer has the
    /// CUSTOMER role, partner exists, partner has the PARTNER role. The
    /// captured `value` is stored verbatim - it is never recomputed from the
    /// product's current price, so historical pricing survives later price
    /// changes.
    ///
    /// The checks and the insert are separate storage calls, not one
    /// transaction; a product deactivated between the check and the write
    /// can still slip through. Accepted gap, inherited from the design.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`], [`AppError::InvalidState`] or
    /// [`AppError::InvalidRole`] per the failing precondition.
    #[instrument(skip(self, sale), fields(product_id = %sale.product_id(), partner_id = %sale.partner_id()))]
    pub async fn record_sale(&self, sale: NewSale) -> Result<Sale, AppError> {
        let product = self
            .products
            .find_by_id(sale.product_id())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {} not found", sale.product_id())))?;
        if !product.is_available_for_sale() {
            return Err(AppError::InvalidState(
                "product not available for sale".to_owned(),
            ));
        }

        let customer = self
            .users
            .find_by_id(sale.customer_id())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", sale.customer_id())))?;
        if !customer.role.is_customer() {
            return Err(AppError::InvalidRole(
                "customerId must reference a user with the CUSTOMER role".to_owned(),
            ));
        }

        let partner = self
            .users
            .find_by_id(sale.partner_id())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", sale.partner_id())))?;
        if !partner.role.is_partner() {
            return Err(AppError::InvalidRole(
                "partnerId must reference a user with the PARTNER role".to_owned(),
            ));
        }

        let created = self.sales.create(&sale).await?;
        info!(sale_id = %created.id, value = %created.value, "sale recorded");
        Ok(created)
    }

    /// List sales with resolved identities, newest first.
    pub async fn find_all(
        &self,
        page: i64,
        limit: i64,
    ) -> Result<PagedResult<SaleWithDetails>, AppError> {
        let total = self.sales.count().await?;
        let pagination = paginate(page, limit, total);
        let data = self.sales.find_all(pagination.skip, pagination.limit).await?;
        Ok(PagedResult::new(data, total, pagination))
    }

    /// Fetch one sale by ID, with resolved identities.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the ID does not exist.
    pub async fn find_by_id(&self, id: SaleId) -> Result<SaleWithDetails, AppError> {
        self.sales
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("sale {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use vendora_core::{ProductId, UserId, UserRole};

    use super::super::fakes::InMemoryDb;
    use super::*;

    fn money(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn service(db: &Arc<InMemoryDb>) -> SaleService {
        SaleService::new(
            Arc::clone(db) as Arc<dyn SaleRepository>,
            Arc::clone(db) as Arc<dyn UserRepository>,
            Arc::clone(db) as Arc<dyn ProductRepository>,
        )
    }

    struct Fixture {
        product: ProductId,
        customer: UserId,
        partner: UserId,
    }

    fn seed(db: &InMemoryDb) -> Fixture {
        Fixture {
            product: db.seed_product("Course", money("100.00"), true),
            customer: db.seed_user("Carlos", "carlos@example.com", UserRole::Customer),
            partner: db.seed_user("Paula", "paula@example.com", UserRole::Partner),
        }
    }

    fn new_sale(f: &Fixture, value: &str) -> NewSale {
        NewSale::new(f.product, f.customer, f.partner, money(value)).unwrap()
    }

    #[tokio::test]
    async fn records_sale_with_caller_supplied_value() {
        let db = Arc::new(InMemoryDb::default());
        let f = seed(&db);

        // Value intentionally differs from the product's current price.
        let sale = service(&db).record_sale(new_sale(&f, "80.00")).await.unwrap();
        assert_eq!(sale.value, money("80.00"));
        assert_eq!(sale.product_id, f.product);
    }

    #[tokio::test]
    async fn missing_product_fails_first() {
        let db = Arc::new(InMemoryDb::default());
        let f = seed(&db);

        let sale = NewSale::new(ProductId::new(999), f.customer, f.partner, money("1")).unwrap();
        let err = service(&db).record_sale(sale).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains("product")));
        assert_eq!(db.sale_count(), 0);
    }

    #[tokio::test]
    async fn inactive_product_is_invalid_state() {
        let db = Arc::new(InMemoryDb::default());
        let f = seed(&db);
        db.deactivate_product(f.product);

        let err = service(&db).record_sale(new_sale(&f, "100.00")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        assert_eq!(db.sale_count(), 0);
    }

    #[tokio::test]
    async fn missing_customer_is_not_found() {
        let db = Arc::new(InMemoryDb::default());
        let f = seed(&db);

        let sale = NewSale::new(f.product, UserId::new(999), f.partner, money("1")).unwrap();
        let err = service(&db).record_sale(sale).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn wrong_customer_role_is_rejected() {
        let db = Arc::new(InMemoryDb::default());
        let f = seed(&db);
        // A partner cannot occupy the customer slot, even though the user
        // exists.
        let sale = NewSale::new(f.product, f.partner, f.partner, money("1")).unwrap();
        let err = service(&db).record_sale(sale).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRole(ref m) if m.contains("customerId")));
        assert_eq!(db.sale_count(), 0);
    }

    #[tokio::test]
    async fn wrong_partner_role_is_rejected() {
        let db = Arc::new(InMemoryDb::default());
        let f = seed(&db);
        let sale = NewSale::new(f.product, f.customer, f.customer, money("1")).unwrap();
        let err = service(&db).record_sale(sale).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRole(ref m) if m.contains("partnerId")));
    }

    #[tokio::test]
    async fn admin_fits_neither_sale_slot() {
        let db = Arc::new(InMemoryDb::default());
        let f = seed(&db);
        let admin = db.seed_user("Root", "root@example.com", UserRole::Admin);

        let as_customer = NewSale::new(f.product, admin, f.partner, money("1")).unwrap();
        assert!(matches!(
            service(&db).record_sale(as_customer).await.unwrap_err(),
            AppError::InvalidRole(_)
        ));

        let as_partner = NewSale::new(f.product, f.customer, admin, money("1")).unwrap();
        assert!(matches!(
            service(&db).record_sale(as_partner).await.unwrap_err(),
            AppError::InvalidRole(_)
        ));
    }

    #[tokio::test]
    async fn validation_failure_writes_nothing() {
        let db = Arc::new(InMemoryDb::default());
        let f = seed(&db);
        db.deactivate_product(f.product);

        let _ = service(&db).record_sale(new_sale(&f, "10.00")).await;
        let _ = service(&db)
            .record_sale(NewSale::new(f.product, f.partner, f.partner, money("1")).unwrap())
            .await;
        assert_eq!(db.sale_count(), 0);
    }

    #[tokio::test]
    async fn listing_returns_details_newest_first() {
        let db = Arc::new(InMemoryDb::default());
        let f = seed(&db);
        let service = service(&db);

        for value in ["10.00", "20.00", "30.00"] {
            service.record_sale(new_sale(&f, value)).await.unwrap();
        }

        let listing = service.find_all(1, 10).await.unwrap();
        assert_eq!(listing.total, 3);
        let values: Vec<Decimal> = listing.data.iter().map(|s| s.sale.value).collect();
        assert_eq!(values, vec![money("30.00"), money("20.00"), money("10.00")]);
        let first = listing.data.first().unwrap();
        assert_eq!(first.product.name, "Course");
        assert_eq!(first.customer.name, "Carlos");
        assert_eq!(first.partner.name, "Paula");
    }

    #[tokio::test]
    async fn fetches_sale_by_id_with_details() {
        let db = Arc::new(InMemoryDb::default());
        let f = seed(&db);
        let service = service(&db);

        let created = service.record_sale(new_sale(&f, "55.00")).await.unwrap();
        let detail = service.find_by_id(created.id).await.unwrap();
        assert_eq!(detail.sale.id, created.id);
        assert_eq!(detail.partner.email.as_str(), "paula@example.com");

        let err = service.find_by_id(SaleId::new(999)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
