//! User management service.

use std::sync::Arc;

use tracing::{info, instrument};
use vendora_core::{UserId, paginate};

use super::PagedResult;
use crate::error::AppError;
use crate::models::{NewUser, User};
use crate::repository::UserRepository;

/// Service for creating and listing users.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Create a user, enforcing email uniqueness across all roles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the email is already registered
    /// (checked up front; a concurrent insert still surfaces as a conflict
    /// through the storage layer's unique constraint).
    #[instrument(skip(self, user), fields(role = %user.role()))]
    pub async fn create(&self, user: NewUser) -> Result<User, AppError> {
        if self.users.find_by_email(user.email()).await?.is_some() {
            return Err(AppError::Conflict("email already registered".to_owned()));
        }

        let created = self.users.create(&user).await?;
        info!(user_id = %created.id, "user created");
        Ok(created)
    }

    /// List users, newest first. Malformed page/limit values have already
    /// been clamped to defaults by the caller.
    pub async fn find_all(&self, page: i64, limit: i64) -> Result<PagedResult<User>, AppError> {
        let total = self.users.count().await?;
        let pagination = paginate(page, limit, total);
        let data = self.users.find_all(pagination.skip, pagination.limit).await?;
        Ok(PagedResult::new(data, total, pagination))
    }

    /// Fetch one user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the ID does not exist.
    pub async fn find_by_id(&self, id: UserId) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {id} not found")))
    }
}
