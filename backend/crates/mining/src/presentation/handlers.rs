//! HTTP Handlers

use axum::Extension;
use axum::Json;
use axum::extract::State;
use kernel::response::ApiResponse;
use std::sync::Arc;

use auth::middleware::CurrentUser;

use crate::application::CollectEarningsUseCase;
use crate::domain::repository::MiningRepository;
use crate::error::MiningResult;
use crate::presentation::dto::{CollectData, PlanDto, PlansData, StatsData};

/// Shared state for mining handlers
#[derive(Clone)]
pub struct MiningAppState<R>
where
    R: MiningRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/mining/plans
pub async fn list_plans<R>(
    State(state): State<MiningAppState<R>>,
) -> MiningResult<Json<ApiResponse<PlansData>>>
where
    R: MiningRepository + Clone + Send + Sync + 'static,
{
    let plans = state.repo.list_active_plans().await?;

    Ok(Json(ApiResponse::ok(PlansData {
        plans: plans.iter().map(PlanDto::from).collect(),
    })))
}

/// POST /api/mining/collect (behind `require_auth`)
pub async fn collect<R>(
    State(state): State<MiningAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> MiningResult<Json<ApiResponse<CollectData>>>
where
    R: MiningRepository + Clone + Send + Sync + 'static,
{
    let use_case = CollectEarningsUseCase::new(state.repo.clone());
    let output = use_case.execute(&user.user_id).await?;

    Ok(Json(ApiResponse::ok(CollectData {
        amount: output.amount,
        balance: output.balance,
    })))
}

/// GET /api/mining/stats (behind `require_admin`)
pub async fn stats<R>(
    State(state): State<MiningAppState<R>>,
) -> MiningResult<Json<ApiResponse<StatsData>>>
where
    R: MiningRepository + Clone + Send + Sync + 'static,
{
    let stats = state.repo.collection_stats().await?;

    Ok(Json(ApiResponse::ok(StatsData::from(stats))))
}
