//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! vendora-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `VENDORA_DATABASE_URL` - `PostgreSQL` connection string

use secrecy::SecretString;

use super::CliError;

/// Run the API database migrations embedded from `crates/api/migrations/`.
///
/// # Errors
///
/// Returns an error if the environment variable is missing, the database is
/// unreachable or a migration fails.
pub async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("VENDORA_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("VENDORA_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = vendora_api::db::create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
