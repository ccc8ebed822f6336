//! Vendora Core - Shared types library.
//!
//! This crate provides common types used across all Vendora components:
//! - `api` - REST API serving users, products, sales, commissions and reports
//! - `cli` - Command-line tools for migrations and data seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure computation - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails and user roles
//! - [`pagination`] - Shared skip/limit/total-page computation for listings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pagination;
pub mod types;

pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, Pagination, paginate};
pub use types::*;
