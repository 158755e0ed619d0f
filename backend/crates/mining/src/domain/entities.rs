//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::PlanId;

/// A purchasable mining plan
#[derive(Debug, Clone)]
pub struct MiningPlan {
    pub plan_id: PlanId,
    pub name: String,
    /// Purchase price
    pub price: f64,
    /// Amount credited per collection for subscribers
    pub earnings_per_cycle: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl MiningPlan {
    pub fn new(name: String, price: f64, earnings_per_cycle: f64) -> Self {
        Self {
            plan_id: PlanId::new(),
            name,
            price,
            earnings_per_cycle,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

/// Aggregate collection figures across all accounts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionStats {
    pub total_collected: f64,
    pub collection_count: i64,
    /// Distinct accounts that have collected at least once
    pub miner_count: i64,
}
