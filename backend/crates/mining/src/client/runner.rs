//! Cycle Runner
//!
//! Owns the scheduling side of the cycle state machine: waits are tokio
//! sleeps, the collect command becomes one call through `CollectApi`, and
//! every observable change is forwarded on an `mpsc` channel. A `watch`
//! signal tears the loop down between commands or mid-wait; a collection
//! cancelled this way never reaches the display total.

use tokio::sync::{mpsc, watch};

use crate::application::config::MiningConfig;
use crate::domain::cycle::{CycleCommand, CycleEvent, CyclePhase};

/// The collection endpoint as the runner sees it
#[trait_variant::make(CollectApi: Send)]
pub trait LocalCollectApi {
    /// One collection attempt; `None` means it failed
    async fn collect(&self) -> Option<f64>;
}

/// Observable cycle changes, in the order they happen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleUpdate {
    PhaseChanged(CyclePhase),
    /// A collection landed; `total` is the running display total
    Collected { amount: f64, total: f64 },
    CollectFailed,
    CycleCompleted(u64),
}

/// Drives a `CycleStateMachine` until shut down
pub struct CycleRunner<A>
where
    A: CollectApi,
{
    api: A,
    config: MiningConfig,
    updates: mpsc::Sender<CycleUpdate>,
    shutdown: watch::Receiver<bool>,
}

impl<A> CycleRunner<A>
where
    A: CollectApi,
{
    pub fn new(
        api: A,
        config: MiningConfig,
        updates: mpsc::Sender<CycleUpdate>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            api,
            config,
            updates,
            shutdown,
        }
    }

    pub async fn run(mut self) {
        let mut machine = self.config.state_machine();
        let mut command = machine.start();

        tracing::info!("Cycle runner started");

        loop {
            let event = match command {
                CycleCommand::Wait(duration) => {
                    tokio::select! {
                        _ = tokio::time::sleep(duration) => CycleEvent::PhaseElapsed,
                        _ = self.shutdown.changed() => break,
                    }
                }
                CycleCommand::Collect => {
                    tokio::select! {
                        amount = self.api.collect() => CycleEvent::CollectResolved(amount),
                        _ = self.shutdown.changed() => break,
                    }
                }
            };

            let phase_before = machine.phase();
            let cycles_before = machine.cycles_completed();

            command = machine.handle(event);

            let mut stop = false;
            if let CycleEvent::CollectResolved(amount) = event {
                let update = match amount {
                    Some(amount) => CycleUpdate::Collected {
                        amount,
                        total: machine.total_collected(),
                    },
                    None => CycleUpdate::CollectFailed,
                };
                stop |= self.updates.send(update).await.is_err();
            }
            if machine.phase() != phase_before {
                stop |= self
                    .updates
                    .send(CycleUpdate::PhaseChanged(machine.phase()))
                    .await
                    .is_err();
            }
            if machine.cycles_completed() != cycles_before {
                stop |= self
                    .updates
                    .send(CycleUpdate::CycleCompleted(machine.cycles_completed()))
                    .await
                    .is_err();
            }

            // Receiver gone: nobody is watching, stop driving
            if stop {
                break;
            }
        }

        tracing::info!(
            cycles = machine.cycles_completed(),
            total = machine.total_collected(),
            "Cycle runner stopped"
        );
    }
}
