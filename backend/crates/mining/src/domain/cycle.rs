//! Mining Cycle State Machine
//!
//! The visual mining loop as an explicit finite state machine. The machine
//! is pure: it receives events and answers with the next command for the
//! scheduler. All timing and I/O live in the runner (`client::runner`),
//! so every transition is testable without a clock.
//!
//! Phases:
//! - Mining (8s): hash animation, particles spawn
//! - Transferring (2s): payout in flight
//! - Depositing: one collection call, then a 1s settle pause
//!
//! A cycle issues exactly one collection. A failed collection leaves the
//! display total unchanged and the next cycle starts on schedule.

use std::time::Duration;

/// Mining phase length
pub const MINING_PHASE: Duration = Duration::from_secs(8);
/// Transfer phase length
pub const TRANSFER_PHASE: Duration = Duration::from_secs(2);
/// Settle pause after the collection resolves
pub const SETTLE_PHASE: Duration = Duration::from_secs(1);

/// Cycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Mining,
    Transferring,
    Depositing,
}

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleEvent {
    /// The scheduled wait for the current phase elapsed
    PhaseElapsed,
    /// The collection call resolved; `None` means it failed
    CollectResolved(Option<f64>),
}

/// What the scheduler should do next
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleCommand {
    /// Sleep, then deliver `PhaseElapsed`
    Wait(Duration),
    /// Issue the collection call, then deliver `CollectResolved`
    Collect,
}

/// The mining cycle as a pure state machine
#[derive(Debug, Clone)]
pub struct CycleStateMachine {
    phase: CyclePhase,
    mining_phase: Duration,
    transfer_phase: Duration,
    settle_phase: Duration,
    total_collected: f64,
    cycles_completed: u64,
}

impl CycleStateMachine {
    pub fn new() -> Self {
        Self::with_timings(MINING_PHASE, TRANSFER_PHASE, SETTLE_PHASE)
    }

    pub fn with_timings(
        mining_phase: Duration,
        transfer_phase: Duration,
        settle_phase: Duration,
    ) -> Self {
        Self {
            phase: CyclePhase::Mining,
            mining_phase,
            transfer_phase,
            settle_phase,
            total_collected: 0.0,
            cycles_completed: 0,
        }
    }

    /// The command that starts the first cycle
    pub fn start(&self) -> CycleCommand {
        CycleCommand::Wait(self.mining_phase)
    }

    /// Apply an event and return the next command
    ///
    /// An event that does not match the current phase is stale (e.g. a
    /// collection outcome arriving after a reset). It is dropped and the
    /// current phase's command is re-issued, so the cycle never stalls.
    pub fn handle(&mut self, event: CycleEvent) -> CycleCommand {
        match (self.phase, event) {
            (CyclePhase::Mining, CycleEvent::PhaseElapsed) => {
                self.phase = CyclePhase::Transferring;
                CycleCommand::Wait(self.transfer_phase)
            }
            (CyclePhase::Transferring, CycleEvent::PhaseElapsed) => {
                self.phase = CyclePhase::Depositing;
                CycleCommand::Collect
            }
            (CyclePhase::Depositing, CycleEvent::CollectResolved(amount)) => {
                match amount {
                    Some(amount) => {
                        self.total_collected += amount;
                        tracing::debug!(amount, total = self.total_collected, "Cycle collected");
                    }
                    None => {
                        tracing::warn!("Collection failed; display total unchanged");
                    }
                }
                CycleCommand::Wait(self.settle_phase)
            }
            (CyclePhase::Depositing, CycleEvent::PhaseElapsed) => {
                self.cycles_completed += 1;
                self.phase = CyclePhase::Mining;
                CycleCommand::Wait(self.mining_phase)
            }
            (phase, event) => {
                tracing::warn!(?phase, ?event, "Stale cycle event dropped");
                self.command_for_phase()
            }
        }
    }

    fn command_for_phase(&self) -> CycleCommand {
        match self.phase {
            CyclePhase::Mining => CycleCommand::Wait(self.mining_phase),
            CyclePhase::Transferring => CycleCommand::Wait(self.transfer_phase),
            CyclePhase::Depositing => CycleCommand::Collect,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn is_mining(&self) -> bool {
        self.phase == CyclePhase::Mining
    }

    /// Running display total; never written back to the server
    pub fn total_collected(&self) -> f64 {
        self.total_collected
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }
}

impl Default for CycleStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
