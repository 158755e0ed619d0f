//! API DTOs (Data Transfer Objects)

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{CollectionStats, MiningPlan};

/// Public plan representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDto {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub earnings_per_cycle: f64,
}

impl From<&MiningPlan> for PlanDto {
    fn from(plan: &MiningPlan) -> Self {
        Self {
            id: *plan.plan_id.as_uuid(),
            name: plan.name.clone(),
            price: plan.price,
            earnings_per_cycle: plan.earnings_per_cycle,
        }
    }
}

/// Payload returned by the plan listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlansData {
    pub plans: Vec<PlanDto>,
}

/// Payload returned by a collection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectData {
    pub amount: f64,
    pub balance: f64,
}

/// Payload returned by the admin stats endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub total_collected: f64,
    pub collection_count: i64,
    pub miner_count: i64,
}

impl From<CollectionStats> for StatsData {
    fn from(stats: CollectionStats) -> Self {
        Self {
            total_collected: stats.total_collected,
            collection_count: stats.collection_count,
            miner_count: stats.miner_count,
        }
    }
}
