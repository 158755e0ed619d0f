//! Unit tests for the mining crate
//!
//! The cycle state machine and particle field are pure, so they are tested
//! without a clock; the runner is tested on a paused tokio runtime.

#[cfg(test)]
mod cycle_tests {
    use std::time::Duration;

    use crate::application::config::MiningConfig;
    use crate::domain::cycle::{
        CycleCommand, CycleEvent, CyclePhase, CycleStateMachine, MINING_PHASE, SETTLE_PHASE,
        TRANSFER_PHASE,
    };

    #[test]
    fn test_full_cycle_sequence() {
        let mut machine = CycleStateMachine::default();

        assert_eq!(machine.phase(), CyclePhase::Mining);
        assert_eq!(machine.start(), CycleCommand::Wait(MINING_PHASE));

        // Mining -> Transferring
        let cmd = machine.handle(CycleEvent::PhaseElapsed);
        assert_eq!(machine.phase(), CyclePhase::Transferring);
        assert_eq!(cmd, CycleCommand::Wait(TRANSFER_PHASE));

        // Transferring -> Depositing issues exactly one collect
        let cmd = machine.handle(CycleEvent::PhaseElapsed);
        assert_eq!(machine.phase(), CyclePhase::Depositing);
        assert_eq!(cmd, CycleCommand::Collect);

        // Collection lands, then the settle pause
        let cmd = machine.handle(CycleEvent::CollectResolved(Some(0.5)));
        assert_eq!(machine.phase(), CyclePhase::Depositing);
        assert_eq!(cmd, CycleCommand::Wait(SETTLE_PHASE));
        assert_eq!(machine.total_collected(), 0.5);

        // Settle over: back to mining, cycle counted
        let cmd = machine.handle(CycleEvent::PhaseElapsed);
        assert_eq!(machine.phase(), CyclePhase::Mining);
        assert_eq!(cmd, CycleCommand::Wait(MINING_PHASE));
        assert_eq!(machine.cycles_completed(), 1);
    }

    #[test]
    fn test_failed_collection_does_not_stall_the_cycle() {
        let mut machine = CycleStateMachine::default();

        machine.handle(CycleEvent::PhaseElapsed);
        machine.handle(CycleEvent::PhaseElapsed);

        let cmd = machine.handle(CycleEvent::CollectResolved(None));
        assert_eq!(cmd, CycleCommand::Wait(SETTLE_PHASE));
        assert_eq!(machine.total_collected(), 0.0);

        let cmd = machine.handle(CycleEvent::PhaseElapsed);
        assert_eq!(machine.phase(), CyclePhase::Mining);
        assert_eq!(cmd, CycleCommand::Wait(MINING_PHASE));
        assert_eq!(machine.cycles_completed(), 1);
    }

    #[test]
    fn test_totals_accumulate_across_cycles() {
        let mut machine = CycleStateMachine::default();

        for amount in [0.5, 1.25, 0.25] {
            machine.handle(CycleEvent::PhaseElapsed);
            machine.handle(CycleEvent::PhaseElapsed);
            machine.handle(CycleEvent::CollectResolved(Some(amount)));
            machine.handle(CycleEvent::PhaseElapsed);
        }

        assert_eq!(machine.total_collected(), 2.0);
        assert_eq!(machine.cycles_completed(), 3);
    }

    #[test]
    fn test_stale_event_is_dropped() {
        let mut machine = CycleStateMachine::default();

        // A collection outcome while still mining must not advance anything
        let cmd = machine.handle(CycleEvent::CollectResolved(Some(10.0)));
        assert_eq!(machine.phase(), CyclePhase::Mining);
        assert_eq!(cmd, CycleCommand::Wait(MINING_PHASE));
        assert_eq!(machine.total_collected(), 0.0);
        assert_eq!(machine.cycles_completed(), 0);
    }

    #[test]
    fn test_custom_timings_flow_through() {
        let config = MiningConfig {
            mining_phase: Duration::from_millis(80),
            transfer_phase: Duration::from_millis(20),
            settle_phase: Duration::from_millis(10),
            ..MiningConfig::default()
        };
        let mut machine = config.state_machine();

        assert_eq!(
            machine.start(),
            CycleCommand::Wait(Duration::from_millis(80))
        );
        assert_eq!(
            machine.handle(CycleEvent::PhaseElapsed),
            CycleCommand::Wait(Duration::from_millis(20))
        );
    }
}

#[cfg(test)]
mod particle_tests {
    use std::time::{Duration, Instant};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::domain::particles::{PARTICLE_LIFETIME, PARTICLE_TICK, ParticleField};

    #[test]
    fn test_no_spawns_outside_mining_phase() {
        let mut field = ParticleField::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut now = Instant::now();

        for _ in 0..100 {
            field.tick(now, false, &mut rng);
            now += PARTICLE_TICK;
        }

        assert!(field.is_empty());
    }

    #[test]
    fn test_spawns_happen_while_mining() {
        let mut field = ParticleField::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut now = Instant::now();
        let mut seen_any = false;

        // Over 100 ticks at 30% the odds of zero spawns are negligible,
        // and the seed is fixed anyway
        for _ in 0..100 {
            field.tick(now, true, &mut rng);
            seen_any |= !field.is_empty();
            now += PARTICLE_TICK;
        }

        assert!(seen_any);
    }

    #[test]
    fn test_particles_expire_after_lifetime() {
        let mut field = ParticleField::new();
        let mut rng = StdRng::seed_from_u64(7);
        let start = Instant::now();

        // Spawn for a while
        let mut now = start;
        for _ in 0..20 {
            field.tick(now, true, &mut rng);
            now += PARTICLE_TICK;
        }

        // One idle tick past the lifetime clears everything spawned so far
        let later = now + PARTICLE_LIFETIME + Duration::from_millis(1);
        field.tick(later, false, &mut rng);
        assert!(field.is_empty());
    }

    #[test]
    fn test_live_particles_are_younger_than_lifetime() {
        let mut field = ParticleField::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut now = Instant::now();

        for _ in 0..50 {
            field.tick(now, true, &mut rng);
            for particle in field.particles() {
                assert!(now.duration_since(particle.spawned_at) < PARTICLE_LIFETIME);
            }
            now += PARTICLE_TICK;
        }
    }
}

#[cfg(test)]
mod runner_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::{mpsc, watch};

    use crate::application::config::MiningConfig;
    use crate::client::runner::{CollectApi, CycleRunner, CycleUpdate};
    use crate::domain::cycle::CyclePhase;

    #[derive(Clone)]
    struct StubCollectApi {
        amount: Option<f64>,
        calls: Arc<AtomicUsize>,
    }

    impl StubCollectApi {
        fn new(amount: Option<f64>) -> Self {
            Self {
                amount,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl CollectApi for StubCollectApi {
        async fn collect(&self) -> Option<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.amount
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_runner_emits_one_collect_per_cycle() {
        let api = StubCollectApi::new(Some(0.5));
        let calls = api.calls.clone();
        let (update_tx, mut updates) = mpsc::channel(32);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let runner = CycleRunner::new(api, MiningConfig::default(), update_tx, shutdown_rx);
        let handle = tokio::spawn(runner.run());

        assert_eq!(
            updates.recv().await,
            Some(CycleUpdate::PhaseChanged(CyclePhase::Transferring))
        );
        assert_eq!(
            updates.recv().await,
            Some(CycleUpdate::PhaseChanged(CyclePhase::Depositing))
        );
        assert_eq!(
            updates.recv().await,
            Some(CycleUpdate::Collected {
                amount: 0.5,
                total: 0.5
            })
        );
        assert_eq!(
            updates.recv().await,
            Some(CycleUpdate::PhaseChanged(CyclePhase::Mining))
        );
        assert_eq!(updates.recv().await, Some(CycleUpdate::CycleCompleted(1)));

        assert_eq!(calls.load(Ordering::SeqCst), 1);

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1, "no collect after shutdown");
    }

    #[tokio::test(start_paused = true)]
    async fn test_runner_survives_failed_collections() {
        let api = StubCollectApi::new(None);
        let (update_tx, mut updates) = mpsc::channel(32);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let runner = CycleRunner::new(api, MiningConfig::default(), update_tx, shutdown_rx);
        let handle = tokio::spawn(runner.run());

        assert_eq!(
            updates.recv().await,
            Some(CycleUpdate::PhaseChanged(CyclePhase::Transferring))
        );
        assert_eq!(
            updates.recv().await,
            Some(CycleUpdate::PhaseChanged(CyclePhase::Depositing))
        );
        assert_eq!(updates.recv().await, Some(CycleUpdate::CollectFailed));
        assert_eq!(
            updates.recv().await,
            Some(CycleUpdate::PhaseChanged(CyclePhase::Mining))
        );
        // The failed cycle still completes on schedule
        assert_eq!(updates.recv().await, Some(CycleUpdate::CycleCompleted(1)));

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_runner_stops_when_updates_receiver_drops() {
        let api = StubCollectApi::new(Some(0.5));
        let (update_tx, updates) = mpsc::channel(32);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let runner = CycleRunner::new(api, MiningConfig::default(), update_tx, shutdown_rx);
        let handle = tokio::spawn(runner.run());

        drop(updates);
        handle.await.unwrap();
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::{Arc, Mutex};

    use auth::domain::value_object::user_id::UserId;

    use crate::application::CollectEarningsUseCase;
    use crate::domain::entities::{CollectionStats, MiningPlan};
    use crate::domain::repository::MiningRepository;
    use crate::error::{MiningError, MiningResult};

    #[derive(Default)]
    struct State {
        plan_rate: Option<f64>,
        base_rate: Option<f64>,
        balance: f64,
        collections: Vec<f64>,
    }

    #[derive(Clone, Default)]
    struct MemoryMiningRepository {
        state: Arc<Mutex<State>>,
    }

    impl MemoryMiningRepository {
        fn with_rates(plan_rate: Option<f64>, base_rate: Option<f64>) -> Self {
            let repo = Self::default();
            {
                let mut state = repo.state.lock().unwrap();
                state.plan_rate = plan_rate;
                state.base_rate = base_rate;
            }
            repo
        }
    }

    impl MiningRepository for MemoryMiningRepository {
        async fn list_active_plans(&self) -> MiningResult<Vec<MiningPlan>> {
            Ok(Vec::new())
        }

        async fn plan_rate_for_user(&self, _user_id: &UserId) -> MiningResult<Option<f64>> {
            Ok(self.state.lock().unwrap().plan_rate)
        }

        async fn base_rate(&self) -> MiningResult<Option<f64>> {
            Ok(self.state.lock().unwrap().base_rate)
        }

        async fn credit_earnings(&self, _user_id: &UserId, amount: f64) -> MiningResult<f64> {
            let mut state = self.state.lock().unwrap();
            state.balance += amount;
            Ok(state.balance)
        }

        async fn record_collection(&self, _user_id: &UserId, amount: f64) -> MiningResult<()> {
            self.state.lock().unwrap().collections.push(amount);
            Ok(())
        }

        async fn collection_stats(&self) -> MiningResult<CollectionStats> {
            let state = self.state.lock().unwrap();
            Ok(CollectionStats {
                total_collected: state.collections.iter().sum(),
                collection_count: state.collections.len() as i64,
                miner_count: 1,
            })
        }
    }

    #[tokio::test]
    async fn test_plan_rate_wins_over_base_rate() {
        let repo = Arc::new(MemoryMiningRepository::with_rates(Some(1.5), Some(0.25)));
        let use_case = CollectEarningsUseCase::new(repo.clone());

        let output = use_case.execute(&UserId::new()).await.unwrap();
        assert_eq!(output.amount, 1.5);
        assert_eq!(output.balance, 1.5);
        assert_eq!(repo.state.lock().unwrap().collections, vec![1.5]);
    }

    #[tokio::test]
    async fn test_base_rate_is_the_fallback() {
        let repo = Arc::new(MemoryMiningRepository::with_rates(None, Some(0.25)));
        let use_case = CollectEarningsUseCase::new(repo);

        let output = use_case.execute(&UserId::new()).await.unwrap();
        assert_eq!(output.amount, 0.25);
    }

    #[tokio::test]
    async fn test_no_rate_at_all_is_an_error() {
        let repo = Arc::new(MemoryMiningRepository::with_rates(None, None));
        let use_case = CollectEarningsUseCase::new(repo.clone());

        let err = use_case.execute(&UserId::new()).await.unwrap_err();
        assert!(matches!(err, MiningError::RateUnavailable));
        assert!(repo.state.lock().unwrap().collections.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_collections_accumulate() {
        let repo = Arc::new(MemoryMiningRepository::with_rates(Some(0.5), None));
        let use_case = CollectEarningsUseCase::new(repo.clone());
        let user_id = UserId::new();

        use_case.execute(&user_id).await.unwrap();
        use_case.execute(&user_id).await.unwrap();
        let output = use_case.execute(&user_id).await.unwrap();

        assert_eq!(output.balance, 1.5);
        assert_eq!(repo.state.lock().unwrap().collections.len(), 3);
    }
}

#[cfg(test)]
mod models_tests {
    use crate::domain::entities::MiningPlan;
    use crate::presentation::dto::{CollectData, PlanDto, StatsData};

    #[test]
    fn test_plan_dto_serialization() {
        let plan = MiningPlan::new("Starter".to_string(), 99.0, 0.5);
        let json = serde_json::to_string(&PlanDto::from(&plan)).unwrap();

        assert!(json.contains(r#""name":"Starter""#));
        assert!(json.contains("earningsPerCycle"));
        assert!(json.contains(r#""price":99.0"#));
    }

    #[test]
    fn test_collect_data_serialization() {
        let json = serde_json::to_string(&CollectData {
            amount: 0.5,
            balance: 10.5,
        })
        .unwrap();

        assert!(json.contains(r#""amount":0.5"#));
        assert!(json.contains(r#""balance":10.5"#));
    }

    #[test]
    fn test_stats_data_serialization() {
        let json = serde_json::to_string(&StatsData {
            total_collected: 12.5,
            collection_count: 25,
            miner_count: 3,
        })
        .unwrap();

        assert!(json.contains("totalCollected"));
        assert!(json.contains("collectionCount"));
        assert!(json.contains("minerCount"));
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::MiningError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(MiningError, StatusCode)> = vec![
            (MiningError::RateUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (MiningError::UserNotFound, StatusCode::NOT_FOUND),
            (
                MiningError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }
}
