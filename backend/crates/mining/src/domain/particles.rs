//! Decorative Particle Field
//!
//! Headless model of the particle layer shown during the mining phase.
//! Particles are cosmetic only and never influence earnings. Spawning is
//! driven by an injected RNG so tests can be deterministic.

use std::time::{Duration, Instant};

use rand::Rng;

/// Field tick interval
pub const PARTICLE_TICK: Duration = Duration::from_millis(200);
/// Spawn probability per tick while mining
pub const PARTICLE_SPAWN_PROBABILITY: f64 = 0.3;
/// Lifetime of a single particle
pub const PARTICLE_LIFETIME: Duration = Duration::from_secs(1);

/// One live particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub id: u64,
    pub spawned_at: Instant,
}

/// The set of live particles
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    next_id: u64,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the field by one tick: expire old particles, then maybe
    /// spawn one. Spawning only happens while the cycle is mining.
    pub fn tick<R: Rng>(&mut self, now: Instant, mining: bool, rng: &mut R) {
        self.particles
            .retain(|p| now.duration_since(p.spawned_at) < PARTICLE_LIFETIME);

        if mining && rng.random_bool(PARTICLE_SPAWN_PROBABILITY) {
            let id = self.next_id;
            self.next_id += 1;
            self.particles.push(Particle {
                id,
                spawned_at: now,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
