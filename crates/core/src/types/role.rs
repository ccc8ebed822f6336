//! User role sum type.
//!
//! A user's role decides which slot of a sale it may occupy: the partner
//! earning commission, the customer buying, or an admin managing the catalog.
//! Roles are immutable after user creation - there is no update path.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned to a user at creation time.
///
/// Serialized (and stored) as `"ADMIN"` / `"PARTNER"` / `"CUSTOMER"`.
/// Adding a variant is a compile-time-checked change: every capability
/// decision below matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Manages users and products, may record sales administratively.
    Admin,
    /// Earns commission on sales attributed to them.
    Partner,
    /// The buyer on a sale.
    Customer,
}

/// Error returned when a stored or supplied role string is unknown.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct RoleParseError(pub String);

impl UserRole {
    /// All roles, in display order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Partner, Self::Customer];

    /// The wire/storage representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Partner => "PARTNER",
            Self::Customer => "CUSTOMER",
        }
    }

    /// Whether this user may occupy the `partner_id` slot of a sale.
    #[must_use]
    pub const fn is_partner(&self) -> bool {
        matches!(self, Self::Partner)
    }

    /// Whether this user may occupy the `customer_id` slot of a sale.
    #[must_use]
    pub const fn is_customer(&self) -> bool {
        matches!(self, Self::Customer)
    }

    /// Whether this user has administrative rights.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this user can record sales administratively.
    #[must_use]
    pub const fn can_create_sale(&self) -> bool {
        match self {
            Self::Admin => true,
            Self::Partner | Self::Customer => false,
        }
    }

    /// Whether this user accrues commission.
    #[must_use]
    pub const fn can_receive_commission(&self) -> bool {
        match self {
            Self::Partner => true,
            Self::Admin | Self::Customer => false,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "PARTNER" => Ok(Self::Partner),
            "CUSTOMER" => Ok(Self::Customer),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

// SQLx support (with postgres feature): roles are stored as TEXT.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for UserRole {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for UserRole {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        s.parse().map_err(Into::into)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for UserRole {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}
