//! # Sanctuary Configuration
//!
//! Timing and radius tunables, loaded once at startup from TOML.
//!
//! Defaults reproduce the production constants in
//! [`wardstone_shared::constants`]; a config file only needs to name the
//! fields it changes.

use std::path::Path;

use serde::Deserialize;
use wardstone_shared::constants::{
    BASELINE_DELAY_TICKS, INITIAL_JOIN_GRANT_TICKS, INITIAL_JOIN_WINDOW_TICKS, PUSHBACK_RADIUS,
    RESPAWN_GRANT_TICKS, RESPAWN_WINDOW_TICKS, SWEEP_GRANT_TICKS, SWEEP_INTERVAL_TICKS,
};
use wardstone_shared::Tick;

use crate::error::ConfigError;

/// Tunables for the spawn sanctuary.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProtectionConfig {
    /// Immediate effect grant on first join (ticks).
    pub initial_join_grant_ticks: Tick,
    /// Immediate effect grant on respawn after death (ticks).
    pub respawn_grant_ticks: Tick,
    /// Effect grant refreshed by each sweep (ticks).
    pub sweep_grant_ticks: Tick,
    /// Minimum invincibility window after a first-join baseline (ticks).
    pub initial_join_window_ticks: Tick,
    /// Minimum invincibility window after a respawn baseline (ticks).
    pub respawn_window_ticks: Tick,
    /// How often the sweep runs (ticks).
    pub sweep_interval_ticks: Tick,
    /// Delay between the spawn event and the baseline capture (ticks).
    pub baseline_delay_ticks: Tick,
    /// Radius inside which hostile creatures are pushed back (blocks).
    pub pushback_radius: f32,
}

impl Default for ProtectionConfig {
    fn default() -> Self {
        Self {
            initial_join_grant_ticks: INITIAL_JOIN_GRANT_TICKS,
            respawn_grant_ticks: RESPAWN_GRANT_TICKS,
            sweep_grant_ticks: SWEEP_GRANT_TICKS,
            initial_join_window_ticks: INITIAL_JOIN_WINDOW_TICKS,
            respawn_window_ticks: RESPAWN_WINDOW_TICKS,
            sweep_interval_ticks: SWEEP_INTERVAL_TICKS,
            baseline_delay_ticks: BASELINE_DELAY_TICKS,
            pushback_radius: PUSHBACK_RADIUS,
        }
    }
}

impl ProtectionConfig {
    /// Returns the minimum invincibility window for a spawn kind.
    #[must_use]
    pub const fn window_for(&self, initial_spawn: bool) -> Tick {
        if initial_spawn {
            self.initial_join_window_ticks
        } else {
            self.respawn_window_ticks
        }
    }

    /// Returns the immediate grant duration for a spawn kind.
    #[must_use]
    pub const fn grant_for(&self, initial_spawn: bool) -> Tick {
        if initial_spawn {
            self.initial_join_grant_ticks
        } else {
            self.respawn_grant_ticks
        }
    }

    /// Parses a config from a TOML string and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for values that violate a timing invariant.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file from disk and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, plus
    /// everything [`Self::from_toml_str`] can return.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Checks the timing invariants the sweep relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the sweep would stall or the
    /// protective effects would visibly lapse between sweeps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sweep_interval_ticks == 0 {
            return Err(ConfigError::Invalid(
                "sweep_interval_ticks must be at least 1".to_string(),
            ));
        }
        if self.sweep_grant_ticks <= self.sweep_interval_ticks {
            return Err(ConfigError::Invalid(format!(
                "sweep_grant_ticks ({}) must exceed sweep_interval_ticks ({}) or effects lapse between sweeps",
                self.sweep_grant_ticks, self.sweep_interval_ticks
            )));
        }
        Ok(())
    }
}
