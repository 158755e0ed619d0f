//! PostgreSQL Repository Implementations

use auth::domain::value_object::user_id::UserId;
use kernel::id::CollectionId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{CollectionStats, MiningPlan};
use crate::domain::repository::MiningRepository;
use crate::error::{MiningError, MiningResult};

/// Settings key for the rate used when an account has no plan
const BASE_RATE_KEY: &str = "base_earnings_per_cycle";

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgMiningRepository {
    pool: PgPool,
}

impl PgMiningRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MiningRepository for PgMiningRepository {
    async fn list_active_plans(&self) -> MiningResult<Vec<MiningPlan>> {
        let rows = sqlx::query_as::<_, PlanRow>(
            r#"
            SELECT plan_id, name, price, earnings_per_cycle, is_active, created_at
            FROM mining_plans
            WHERE is_active
            ORDER BY price
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PlanRow::into_plan).collect())
    }

    async fn plan_rate_for_user(&self, user_id: &UserId) -> MiningResult<Option<f64>> {
        let rate = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT p.earnings_per_cycle
            FROM users u
            JOIN mining_plans p ON p.plan_id = u.plan_id
            WHERE u.user_id = $1 AND p.is_active
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(rate)
    }

    async fn base_rate(&self) -> MiningResult<Option<f64>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = $1")
            .bind(BASE_RATE_KEY)
            .fetch_optional(&self.pool)
            .await?;

        match value {
            Some(raw) => {
                let rate = raw.parse::<f64>().map_err(|_| {
                    MiningError::Internal(format!("Setting {BASE_RATE_KEY} is not a number"))
                })?;
                Ok(Some(rate))
            }
            None => Ok(None),
        }
    }

    async fn credit_earnings(&self, user_id: &UserId, amount: f64) -> MiningResult<f64> {
        // Single statement: concurrent collections serialize on the row
        let balance = sqlx::query_scalar::<_, f64>(
            r#"
            UPDATE users
            SET balance = balance + $2, updated_at = now()
            WHERE user_id = $1
            RETURNING balance
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(amount)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(MiningError::UserNotFound)?;

        tracing::info!(user_id = %user_id, amount, balance, "Balance credited");

        Ok(balance)
    }

    async fn record_collection(&self, user_id: &UserId, amount: f64) -> MiningResult<()> {
        sqlx::query(
            r#"
            INSERT INTO collections (collection_id, user_id, amount)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(CollectionId::new().as_uuid())
        .bind(user_id.as_uuid())
        .bind(amount)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn collection_stats(&self) -> MiningResult<CollectionStats> {
        let (total_collected, collection_count, miner_count) =
            sqlx::query_as::<_, (f64, i64, i64)>(
                r#"
                SELECT
                    COALESCE(SUM(amount), 0)::DOUBLE PRECISION,
                    COUNT(*),
                    COUNT(DISTINCT user_id)
                FROM collections
                "#,
            )
            .fetch_one(&self.pool)
            .await?;

        Ok(CollectionStats {
            total_collected,
            collection_count,
            miner_count,
        })
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PlanRow {
    plan_id: Uuid,
    name: String,
    price: f64,
    earnings_per_cycle: f64,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl PlanRow {
    fn into_plan(self) -> MiningPlan {
        MiningPlan {
            plan_id: self.plan_id.into(),
            name: self.name,
            price: self.price,
            earnings_per_cycle: self.earnings_per_cycle,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}
