//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `VENDORA_DATABASE_URL` - `PostgreSQL` connection string
//!
//! ## Optional
//! - `VENDORA_HOST` - Bind address (default: 127.0.0.1)
//! - `VENDORA_PORT` - Listen port (default: 3000)
//! - `VENDORA_COMMISSION_RATE` - Partner commission rate as a decimal
//!   fraction (default: 0.10). Fixed per deployment, not per partner.
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use rust_decimal::Decimal;
use secrecy::SecretString;
use thiserror::Error;

/// Default partner commission rate: 10% of total sale value.
pub const DEFAULT_COMMISSION_RATE: &str = "0.10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Fraction of a partner's total sale value paid out as commission
    pub commission_rate: Decimal,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("VENDORA_DATABASE_URL")
            .map(SecretString::from)
            .map_err(|_| ConfigError::MissingEnvVar("VENDORA_DATABASE_URL".to_owned()))?;

        let host = parse_host(&optional_env("VENDORA_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()))?;

        let port = parse_port(&optional_env("VENDORA_PORT").unwrap_or_else(|| "3000".to_owned()))?;

        let commission_rate = parse_commission_rate(
            &optional_env("VENDORA_COMMISSION_RATE")
                .unwrap_or_else(|| DEFAULT_COMMISSION_RATE.to_owned()),
        )?;

        let sentry_dsn = optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            commission_rate,
            sentry_dsn,
        })
    }

    /// Socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_host(value: &str) -> Result<IpAddr, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar("VENDORA_HOST".to_owned(), value.to_owned()))
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar("VENDORA_PORT".to_owned(), value.to_owned()))
}

/// Parse and range-check the commission rate: a fraction in `[0, 1]`.
fn parse_commission_rate(value: &str) -> Result<Decimal, ConfigError> {
    let rate: Decimal = value.parse().map_err(|_| {
        ConfigError::InvalidEnvVar("VENDORA_COMMISSION_RATE".to_owned(), value.to_owned())
    })?;

    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ConfigError::InvalidEnvVar(
            "VENDORA_COMMISSION_RATE".to_owned(),
            format!("{value} (must be between 0 and 1)"),
        ));
    }

    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_commission_rate_is_ten_percent() {
        let rate = parse_commission_rate(DEFAULT_COMMISSION_RATE).unwrap();
        assert_eq!(rate, "0.10".parse::<Decimal>().unwrap());
    }

    #[test]
    fn commission_rate_rejects_out_of_range() {
        assert!(parse_commission_rate("1.5").is_err());
        assert!(parse_commission_rate("-0.1").is_err());
        assert!(parse_commission_rate("ten percent").is_err());
    }

    #[test]
    fn commission_rate_accepts_bounds() {
        assert!(parse_commission_rate("0").is_ok());
        assert!(parse_commission_rate("1").is_ok());
    }

    #[test]
    fn host_parses_v4_and_v6() {
        assert!(parse_host("0.0.0.0").is_ok());
        assert!(parse_host("::1").is_ok());
        assert!(parse_host("not-an-ip").is_err());
    }

    #[test]
    fn port_rejects_garbage() {
        assert!(parse_port("8080").is_ok());
        assert!(parse_port("eighty").is_err());
        assert!(parse_port("70000").is_err());
    }
}
