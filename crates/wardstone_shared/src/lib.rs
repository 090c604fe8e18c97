//! # WARDSTONE Shared
//!
//! Common types used by the sanctuary feature and its host.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - the host simulation API
//! - anything that performs I/O
//!
//! If a type needs to talk to the host, it belongs in `wardstone`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod events;
pub mod ids;
pub mod math;

pub use constants::{
    BASELINE_DELAY_TICKS, INITIAL_JOIN_GRANT_TICKS, INITIAL_JOIN_WINDOW_TICKS, PUSHBACK_RADIUS,
    RESPAWN_GRANT_TICKS, RESPAWN_WINDOW_TICKS, SANCTUARY_AMPLIFIER, SWEEP_GRANT_TICKS,
    SWEEP_INTERVAL_TICKS,
};
pub use events::WorldEvent;
pub use ids::{EntityId, PlayerId, Tick};
pub use math::Vec3;
