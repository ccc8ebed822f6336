//! Postgres adapters for the repository ports.
//!
//! # Tables
//!
//! - `users` - all roles in one table, role stored as TEXT
//! - `products` - catalog with an `active` availability flag
//! - `sales` - append-only transaction facts
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p vendora-cli -- migrate
//! ```
//!
//! All queries use the runtime-checked sqlx API; row structs derive
//! `FromRow` and convert into domain types via `TryFrom`, so invalid stored
//! data surfaces as [`RepositoryError::DataCorruption`] rather than a panic.

pub mod products;
pub mod reports;
pub mod sales;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use products::PgProductRepository;
pub use reports::PgReportRepository;
pub use sales::PgSaleRepository;
pub use users::PgUserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Classify an insert failure, turning a unique-constraint violation
    /// into [`RepositoryError::Conflict`].
    pub(crate) fn from_insert(err: sqlx::Error, constraint_hint: &str) -> Self {
        match &err {
            sqlx::Error::Database(db)
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                Self::Conflict(constraint_hint.to_owned())
            }
            _ => Self::Database(err),
        }
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
