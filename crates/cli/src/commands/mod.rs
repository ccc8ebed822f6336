//! CLI subcommand implementations.

pub mod migrate;
pub mod seed;

use thiserror::Error;
use vendora_api::db::RepositoryError;
use vendora_api::models::ValidationError;

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid seed data: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid seed email: {0}")]
    Email(#[from] vendora_core::EmailError),
}
