//! # Sanctuary Timing Constants
//!
//! Production tuning for the spawn sanctuary.
//!
//! **CRITICAL:** The sweep interval must stay well below the sweep grant
//! duration, otherwise protective effects visibly lapse between sweeps.

use crate::ids::Tick;

// =============================================================================
// SCHEDULING
// =============================================================================

/// How often the sweep visits the registry (ticks).
pub const SWEEP_INTERVAL_TICKS: Tick = 4;

/// Delay between the spawn event and the baseline capture (ticks).
///
/// The spawn transition itself occupies a tick during which position may
/// not be settled; the baseline is captured after it.
pub const BASELINE_DELAY_TICKS: Tick = 4;

// =============================================================================
// GRANT DURATIONS
// =============================================================================

/// Immediate effect grant when a player joins the world (ticks).
pub const INITIAL_JOIN_GRANT_TICKS: Tick = 60;

/// Immediate effect grant when a player respawns after death (ticks).
pub const RESPAWN_GRANT_TICKS: Tick = 40;

/// Effect grant refreshed by every sweep for still-protected players (ticks).
pub const SWEEP_GRANT_TICKS: Tick = 20;

// =============================================================================
// INVINCIBILITY WINDOWS
// =============================================================================

/// Minimum protection window after a first-join baseline (ticks).
/// No player input can end protection before this has elapsed.
pub const INITIAL_JOIN_WINDOW_TICKS: Tick = 80;

/// Minimum protection window after a respawn baseline (ticks).
pub const RESPAWN_WINDOW_TICKS: Tick = 60;

// =============================================================================
// EFFECTS & PUSHBACK
// =============================================================================

/// Amplifier applied to every sanctuary effect. The host clamps this to
/// its maximum effective level.
pub const SANCTUARY_AMPLIFIER: u8 = 99;

/// Radius around the player inside which hostile creatures are pushed
/// back (blocks).
pub const PUSHBACK_RADIUS: f32 = 3.0;
