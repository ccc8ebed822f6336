//! Sale domain types.
//!
//! A sale is an immutable fact: once recorded it is never updated or
//! deleted, and its `value` stays whatever was captured at sale time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use vendora_core::{ProductId, SaleId, UserId};

use super::{ProductSummary, UserSummary, ValidationError};

/// A recorded sale (domain type, flat references).
#[derive(Debug, Clone)]
pub struct Sale {
    /// Unique sale ID.
    pub id: SaleId,
    /// Product sold.
    pub product_id: ProductId,
    /// Buyer; always a user with the CUSTOMER role.
    pub customer_id: UserId,
    /// Commission earner; always a user with the PARTNER role.
    pub partner_id: UserId,
    /// Transaction value captured at sale time. May differ from the
    /// product's current price.
    pub value: Decimal,
    /// When the sale was recorded.
    pub created_at: DateTime<Utc>,
}

/// A sale with its related identities resolved for display.
#[derive(Debug, Clone)]
pub struct SaleWithDetails {
    pub sale: Sale,
    pub product: ProductSummary,
    pub customer: UserSummary,
    pub partner: UserSummary,
}

/// A validated request to record a sale.
///
/// Cross-entity preconditions (product exists and is active, roles match)
/// are the sale service's job; this type only owns the field-level rule.
#[derive(Debug, Clone)]
pub struct NewSale {
    product_id: ProductId,
    customer_id: UserId,
    partner_id: UserId,
    value: Decimal,
}

impl NewSale {
    /// Validate and build a sale creation request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeValue`] when `value` is below zero.
    pub fn new(
        product_id: ProductId,
        customer_id: UserId,
        partner_id: UserId,
        value: Decimal,
    ) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::NegativeValue);
        }
        Ok(Self {
            product_id,
            customer_id,
            partner_id,
            value,
        })
    }

    /// Product to be sold.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Buyer.
    #[must_use]
    pub const fn customer_id(&self) -> UserId {
        self.customer_id
    }

    /// Commission earner.
    #[must_use]
    pub const fn partner_id(&self) -> UserId {
        self.partner_id
    }

    /// Transaction value to capture.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_caller_supplied_value() {
        let sale = NewSale::new(
            ProductId::new(1),
            UserId::new(2),
            UserId::new(3),
            "123.45".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(sale.value(), "123.45".parse::<Decimal>().unwrap());
    }

    #[test]
    fn rejects_negative_value() {
        let err = NewSale::new(
            ProductId::new(1),
            UserId::new(2),
            UserId::new(3),
            "-1".parse().unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::NegativeValue);
    }

    #[test]
    fn zero_value_is_allowed() {
        assert!(
            NewSale::new(
                ProductId::new(1),
                UserId::new(2),
                UserId::new(3),
                Decimal::ZERO,
            )
            .is_ok()
        );
    }
}
