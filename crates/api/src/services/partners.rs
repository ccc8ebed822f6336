//! Partner commission service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::instrument;
use vendora_core::UserId;

use crate::error::AppError;
use crate::models::CommissionSummary;
use crate::repository::{SaleRepository, UserRepository};

/// Service aggregating a partner's sales into commission figures.
#[derive(Clone)]
pub struct PartnerService {
    users: Arc<dyn UserRepository>,
    sales: Arc<dyn SaleRepository>,
    commission_rate: Decimal,
}

impl PartnerService {
    /// Create a new partner service with the deployment's commission rate.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserRepository>,
        sales: Arc<dyn SaleRepository>,
        commission_rate: Decimal,
    ) -> Self {
        Self {
            users,
            sales,
            commission_rate,
        }
    }

    /// Compute a partner's lifetime commission figures.
    ///
    /// The result is a pure function of the partner's current sale set -
    /// repeated calls with no intervening sales yield identical output.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the ID does not exist and
    /// [`AppError::InvalidArgument`] when it references a non-partner user.
    #[instrument(skip(self))]
    pub async fn commissions(&self, partner_id: UserId) -> Result<CommissionSummary, AppError> {
        let partner = self
            .users
            .find_by_id(partner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("partner {partner_id} not found")))?;
        if !partner.role.is_partner() {
            return Err(AppError::InvalidArgument(format!(
                "user {partner_id} is not a partner"
            )));
        }

        let sales = self.sales.find_by_partner(partner_id).await?;

        let total_sales = sales.len() as i64;
        let total_value: Decimal = sales.iter().map(|sale| sale.value).sum();
        let total_commission = total_value * self.commission_rate;

        Ok(CommissionSummary {
            partner_id: partner.id,
            partner_name: partner.name,
            total_sales,
            total_value,
            total_commission,
            commission_rate: self.commission_rate,
        })
    }
}
