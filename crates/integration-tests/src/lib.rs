//! Integration tests for Vendora.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p vendora-cli -- migrate
//!
//! # Start the API
//! cargo run -p vendora-api
//!
//! # Point the tests at it and run them
//! VENDORA_API_BASE_URL=http://localhost:3000 cargo test -p vendora-integration-tests
//! ```
//!
//! Every test is gated on `VENDORA_API_BASE_URL`: when the variable is not
//! set the test skips itself, so `cargo test` stays green on machines
//! without a running server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::{SystemTime, UNIX_EPOCH};

/// Base URL of the API under test, if one is configured.
#[must_use]
pub fn base_url() -> Option<String> {
    std::env::var("VENDORA_API_BASE_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .map(|v| v.trim_end_matches('/').to_owned())
}

/// A unique email for this test run; emails are globally unique in the API,
/// and test databases are not always reset between runs.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{prefix}-{nanos}@test.vendora.dev")
}

/// Skip helper: returns the base URL or logs why the test is a no-op.
#[must_use]
pub fn require_server(test_name: &str) -> Option<String> {
    let url = base_url();
    if url.is_none() {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("skipping {test_name}: VENDORA_API_BASE_URL not set");
        }
    }
    url
}
