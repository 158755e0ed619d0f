//! Collect Earnings Use Case
//!
//! Credits one cycle's earnings to an account. The rate comes from the
//! user's plan when one is assigned, otherwise from the seeded base rate.

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::repository::MiningRepository;
use crate::error::{MiningError, MiningResult};

/// Collect earnings output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectOutput {
    /// Amount credited by this collection
    pub amount: f64,
    /// Balance after the credit
    pub balance: f64,
}

/// Collect earnings use case
pub struct CollectEarningsUseCase<R>
where
    R: MiningRepository,
{
    repo: Arc<R>,
}

impl<R> CollectEarningsUseCase<R>
where
    R: MiningRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> MiningResult<CollectOutput> {
        let amount = match self.repo.plan_rate_for_user(user_id).await? {
            Some(rate) => rate,
            None => self
                .repo
                .base_rate()
                .await?
                .ok_or(MiningError::RateUnavailable)?,
        };

        let balance = self.repo.credit_earnings(user_id, amount).await?;
        self.repo.record_collection(user_id, amount).await?;

        tracing::info!(user_id = %user_id, amount, balance, "Earnings collected");

        Ok(CollectOutput { amount, balance })
    }
}
