//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the infra layer.

use auth::domain::value_object::user_id::UserId;

use crate::domain::entities::{CollectionStats, MiningPlan};
use crate::error::MiningResult;

/// Mining repository trait
#[trait_variant::make(MiningRepository: Send)]
pub trait LocalMiningRepository {
    /// List plans available for purchase
    async fn list_active_plans(&self) -> MiningResult<Vec<MiningPlan>>;

    /// Per-cycle rate of the user's active plan, if any
    async fn plan_rate_for_user(&self, user_id: &UserId) -> MiningResult<Option<f64>>;

    /// Fallback per-cycle rate from the settings table
    async fn base_rate(&self) -> MiningResult<Option<f64>>;

    /// Atomically add `amount` to the user's balance and return the new
    /// balance. Concurrent collections serialize on the row update, so
    /// no increment is ever lost.
    async fn credit_earnings(&self, user_id: &UserId, amount: f64) -> MiningResult<f64>;

    /// Append a collection row for auditing
    async fn record_collection(&self, user_id: &UserId, amount: f64) -> MiningResult<()>;

    /// Aggregate figures for the admin dashboard
    async fn collection_stats(&self) -> MiningResult<CollectionStats>;
}
