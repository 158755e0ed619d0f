//! Application Layer
//!
//! Use cases and application services.

pub mod collect_earnings;
pub mod config;

// Re-exports
pub use collect_earnings::{CollectEarningsUseCase, CollectOutput};
pub use config::MiningConfig;
