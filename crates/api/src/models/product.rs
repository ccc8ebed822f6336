//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use vendora_core::ProductId;

use super::ValidationError;

/// A catalog product (domain type).
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current list price. Sales capture their own value, so changing this
    /// never rewrites history.
    pub price: Decimal,
    /// Whether new sales may reference this product.
    pub active: bool,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether this product can appear on a new sale. Inactive products stay
    /// visible in listings and in historical sales.
    #[must_use]
    pub const fn is_available_for_sale(&self) -> bool {
        self.active
    }
}

/// Identity fields of a product, embedded in sale details and reports.
#[derive(Debug, Clone)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// A validated request to create a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    name: String,
    price: Decimal,
    active: bool,
}

impl NewProduct {
    /// Validate and build a product creation request.
    ///
    /// `active` defaults to `true` when the caller does not say otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyProductName`] for a blank name and
    /// [`ValidationError::NegativePrice`] for a price below zero.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        active: Option<bool>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyProductName);
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(ValidationError::NegativePrice);
        }
        Ok(Self {
            name,
            price,
            active: active.unwrap_or(true),
        })
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// List price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Initial availability.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn active_defaults_to_true() {
        let product = NewProduct::new("Keyboard", money("250.00"), None).unwrap();
        assert!(product.active());
    }

    #[test]
    fn explicit_inactive_is_kept() {
        let product = NewProduct::new("Legacy SKU", money("10.00"), Some(false)).unwrap();
        assert!(!product.active());
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            NewProduct::new("   ", money("1.00"), None).unwrap_err(),
            ValidationError::EmptyProductName
        );
    }

    #[test]
    fn rejects_negative_price() {
        assert_eq!(
            NewProduct::new("Gadget", money("-0.01"), None).unwrap_err(),
            ValidationError::NegativePrice
        );
    }

    #[test]
    fn zero_price_is_allowed() {
        assert!(NewProduct::new("Freebie", Decimal::ZERO, None).is_ok());
    }

    #[test]
    fn availability_follows_active_flag() {
        let mut product = Product {
            id: ProductId::new(1),
            name: "Mouse".to_owned(),
            price: money("99.90"),
            active: true,
            created_at: Utc::now(),
        };
        assert!(product.is_available_for_sale());
        product.active = false;
        assert!(!product.is_available_for_sale());
    }
}
