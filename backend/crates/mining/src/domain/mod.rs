//! Domain Layer
//!
//! Entities, the cycle state machine, particles, and repository traits.

pub mod cycle;
pub mod entities;
pub mod particles;
pub mod repository;
