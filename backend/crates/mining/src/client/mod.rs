//! Client Layer
//!
//! Drives the cycle state machine against real timers and a collection
//! endpoint. Headless: consumers render updates however they like.

pub mod runner;

pub use runner::{CollectApi, CycleRunner, CycleUpdate, LocalCollectApi};
