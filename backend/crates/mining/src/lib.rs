//! Mining Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits, cycle state machine
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//! - `client/` - Headless cycle runner (visualizer driver)
//!
//! ## Earnings Model
//! - The server is the sole authority for earnings: one atomic balance
//!   increment per collection, at the rate of the user's plan (or the
//!   seeded base rate when no plan is assigned)
//! - The client cycle is a visualization driver; its running total is
//!   display state only and never flows back to the server
//! - Collection failures are absorbed by the cycle: the display total
//!   stays unchanged and the next cycle starts on schedule

pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MiningConfig;
pub use error::{MiningError, MiningResult};
pub use infra::postgres::PgMiningRepository;
pub use presentation::router::mining_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::cycle::*;
    pub use crate::domain::entities::*;
    pub use crate::domain::particles::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgMiningRepository as MiningStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
