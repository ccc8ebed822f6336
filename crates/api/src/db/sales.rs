//! Sale repository backed by `PostgreSQL`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use vendora_core::{Email, ProductId, SaleId, UserId};

use super::RepositoryError;
use crate::models::{NewSale, ProductSummary, Sale, SaleWithDetails, UserSummary};
use crate::repository::SaleRepository;

/// Internal row type for flat sale queries.
#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: i32,
    product_id: i32,
    customer_id: i32,
    partner_id: i32,
    value: Decimal,
    created_at: DateTime<Utc>,
}

impl From<SaleRow> for Sale {
    fn from(row: SaleRow) -> Self {
        Self {
            id: SaleId::new(row.id),
            product_id: ProductId::new(row.product_id),
            customer_id: UserId::new(row.customer_id),
            partner_id: UserId::new(row.partner_id),
            value: row.value,
            created_at: row.created_at,
        }
    }
}

/// Internal row type for sale queries joined with product and user
/// identities.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct SaleDetailRow {
    id: i32,
    product_id: i32,
    customer_id: i32,
    partner_id: i32,
    value: Decimal,
    created_at: DateTime<Utc>,
    product_name: String,
    product_price: Decimal,
    customer_name: String,
    customer_email: String,
    partner_name: String,
    partner_email: String,
}

impl TryFrom<SaleDetailRow> for SaleWithDetails {
    type Error = RepositoryError;

    fn try_from(row: SaleDetailRow) -> Result<Self, Self::Error> {
        let customer_email = Email::parse(&row.customer_email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let partner_email = Email::parse(&row.partner_email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            sale: Sale {
                id: SaleId::new(row.id),
                product_id: ProductId::new(row.product_id),
                customer_id: UserId::new(row.customer_id),
                partner_id: UserId::new(row.partner_id),
                value: row.value,
                created_at: row.created_at,
            },
            product: ProductSummary {
                id: ProductId::new(row.product_id),
                name: row.product_name,
                price: row.product_price,
            },
            customer: UserSummary {
                id: UserId::new(row.customer_id),
                name: row.customer_name,
                email: customer_email,
            },
            partner: UserSummary {
                id: UserId::new(row.partner_id),
                name: row.partner_name,
                email: partner_email,
            },
        })
    }
}

/// Columns selected by every detail query; kept in one place so the list and
/// by-id queries cannot drift apart.
pub(super) const SALE_DETAIL_COLUMNS: &str = r"
    s.id, s.product_id, s.customer_id, s.partner_id, s.value, s.created_at,
    p.name AS product_name, p.price AS product_price,
    c.name AS customer_name, c.email AS customer_email,
    r.name AS partner_name, r.email AS partner_email
";

/// Join clause resolving the three related identities.
pub(super) const SALE_DETAIL_JOINS: &str = r"
    FROM sales s
    JOIN products p ON p.id = s.product_id
    JOIN users c ON c.id = s.customer_id
    JOIN users r ON r.id = s.partner_id
";

/// Postgres implementation of the [`SaleRepository`] port.
#[derive(Debug, Clone)]
pub struct PgSaleRepository {
    pool: PgPool,
}

impl PgSaleRepository {
    /// Create a new sale repository over a shared pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRepository for PgSaleRepository {
    async fn create(&self, sale: &NewSale) -> Result<Sale, RepositoryError> {
        let row = sqlx::query_as::<_, SaleRow>(
            r"
            INSERT INTO sales (product_id, customer_id, partner_id, value)
            VALUES ($1, $2, $3, $4)
            RETURNING id, product_id, customer_id, partner_id, value, created_at
            ",
        )
        .bind(sale.product_id().as_i32())
        .bind(sale.customer_id().as_i32())
        .bind(sale.partner_id().as_i32())
        .bind(sale.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: SaleId) -> Result<Option<SaleWithDetails>, RepositoryError> {
        let sql =
            format!("SELECT {SALE_DETAIL_COLUMNS} {SALE_DETAIL_JOINS} WHERE s.id = $1");
        let row = sqlx::query_as::<_, SaleDetailRow>(&sql)
            .bind(id.as_i32())
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_all(
        &self,
        skip: i64,
        take: i64,
    ) -> Result<Vec<SaleWithDetails>, RepositoryError> {
        let sql = format!(
            "SELECT {SALE_DETAIL_COLUMNS} {SALE_DETAIL_JOINS} ORDER BY s.created_at DESC OFFSET $1 LIMIT $2"
        );
        let rows = sqlx::query_as::<_, SaleDetailRow>(&sql)
            .bind(skip)
            .bind(take)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_by_partner(&self, partner_id: UserId) -> Result<Vec<Sale>, RepositoryError> {
        let rows = sqlx::query_as::<_, SaleRow>(
            r"
            SELECT id, product_id, customer_id, partner_id, value, created_at
            FROM sales
            WHERE partner_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(partner_id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
