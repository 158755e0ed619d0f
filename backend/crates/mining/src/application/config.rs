//! Application Configuration
//!
//! Timing parameters for the client cycle and particle field.

use std::time::Duration;

use crate::domain::cycle::{CycleStateMachine, MINING_PHASE, SETTLE_PHASE, TRANSFER_PHASE};
use crate::domain::particles::{PARTICLE_LIFETIME, PARTICLE_SPAWN_PROBABILITY, PARTICLE_TICK};

/// Mining application configuration
#[derive(Debug, Clone)]
pub struct MiningConfig {
    /// Mining phase length
    pub mining_phase: Duration,
    /// Transfer phase length
    pub transfer_phase: Duration,
    /// Settle pause after a collection resolves
    pub settle_phase: Duration,
    /// Particle field tick interval
    pub particle_tick: Duration,
    /// Particle lifetime
    pub particle_lifetime: Duration,
    /// Spawn probability per particle tick while mining
    pub particle_spawn_probability: f64,
}

impl MiningConfig {
    /// Build a cycle state machine with this configuration's timings
    pub fn state_machine(&self) -> CycleStateMachine {
        CycleStateMachine::with_timings(self.mining_phase, self.transfer_phase, self.settle_phase)
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            mining_phase: MINING_PHASE,
            transfer_phase: TRANSFER_PHASE,
            settle_phase: SETTLE_PHASE,
            particle_tick: PARTICLE_TICK,
            particle_lifetime: PARTICLE_LIFETIME,
            particle_spawn_probability: PARTICLE_SPAWN_PROBABILITY,
        }
    }
}
