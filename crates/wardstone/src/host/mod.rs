//! # Host Seams
//!
//! Traits the enclosing game server implements for the sanctuary feature.
//!
//! ## Architecture (Glass Walls Policy)
//!
//! The sanctuary feature NEVER reaches into the host's world state.
//! Instead, the seams are defined here and the host implements them.
//!
//! ```text
//! wardstone defines:     host implements:
//! ┌────────────────┐     ┌────────────────┐
//! │ trait Seam     │ ←── │ impl Seam      │
//! └────────────────┘     └────────────────┘
//! ```
//!
//! Every player read is an explicit liveness check: a player who has left
//! the server reads as `None`, and callers treat that as an eviction
//! trigger rather than a fault.

pub mod traits;

pub use traits::{
    AppliedEffect, CreatureProximity, CreatureQuery, EffectApplication, EffectKind, EntityFamily,
    MockCreature, MockWorld, NearbyCreature, PlayerAccess, PlayerSnapshot, StatusEffects,
};
