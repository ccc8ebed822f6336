//! User domain types.

use chrono::{DateTime, Utc};
use vendora_core::{Email, UserId, UserRole};

use super::ValidationError;

/// Minimum length of a user name, after trimming.
const MIN_NAME_LENGTH: usize = 3;

/// A user loaded from storage (domain type).
///
/// The role is fixed at creation; no part of the API mutates it.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique across all users regardless of role.
    pub email: Email,
    /// Role deciding which sale slot this user may occupy.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// Identity fields of a user, embedded in sale details and reports.
#[derive(Debug, Clone)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// A validated request to create a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    name: String,
    email: Email,
    role: UserRole,
}

impl NewUser {
    /// Validate and build a user creation request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameTooShort`] when the trimmed name has
    /// fewer than 3 characters. Email validity is enforced by the [`Email`]
    /// type itself.
    pub fn new(
        name: impl Into<String>,
        email: Email,
        role: UserRole,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().chars().count() < MIN_NAME_LENGTH {
            return Err(ValidationError::NameTooShort {
                min: MIN_NAME_LENGTH,
            });
        }
        Ok(Self { name, email, role })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Requested role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::parse("someone@example.com").unwrap()
    }

    #[test]
    fn accepts_three_char_name() {
        assert!(NewUser::new("Ana", email(), UserRole::Customer).is_ok());
    }

    #[test]
    fn rejects_short_name() {
        let err = NewUser::new("Al", email(), UserRole::Customer).unwrap_err();
        assert_eq!(err, ValidationError::NameTooShort { min: 3 });
    }

    #[test]
    fn whitespace_does_not_count_toward_length() {
        assert!(NewUser::new("  a  ", email(), UserRole::Partner).is_err());
    }

    #[test]
    fn summary_copies_identity_fields() {
        let user = User {
            id: UserId::new(9),
            name: "Maria Silva".to_owned(),
            email: email(),
            role: UserRole::Partner,
            created_at: Utc::now(),
        };
        let summary = UserSummary::from(&user);
        assert_eq!(summary.id, user.id);
        assert_eq!(summary.name, user.name);
        assert_eq!(summary.email, user.email);
    }
}
