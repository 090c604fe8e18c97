//! # Spawn Protection
//!
//! The protection state machine:
//! - `registry`: who is protected and their spawn baselines
//! - `effects`: the protective package and hostile pushback
//! - `sweep`: per-record eviction verdicts
//! - `service`: ties the three together per world

pub mod effects;
pub mod registry;
pub mod service;
pub mod sweep;

pub use effects::{grant_protection, SANCTUARY_EFFECTS};
pub use registry::{ProtectionRecord, ProtectionRegistry};
pub use service::SpawnProtection;
pub use sweep::{evaluate_record, has_left_baseline, EvictionReason, SweepVerdict};
