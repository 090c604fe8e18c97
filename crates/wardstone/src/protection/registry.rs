//! # Protection Registry
//!
//! The process-wide mapping from player session to protection record.
//!
//! Lifecycle invariant: a record exists for a player iff that player is
//! currently inside their protection window. Records are created by the
//! delayed baseline capture and destroyed by the sweep; nothing else
//! touches the map. Nothing survives a restart - the registry is rebuilt
//! from live spawn events.

use std::collections::HashMap;

use wardstone_shared::{PlayerId, Tick, Vec3};

use crate::config::ProtectionConfig;

/// Baseline captured for one currently-protected player.
///
/// All fields are immutable after creation; the only mutation the registry
/// permits is whole-record removal.
#[derive(Clone, Copy, Debug)]
pub struct ProtectionRecord {
    /// Tick at which the baseline was captured.
    pub origin_tick: Tick,
    /// Position at baseline time.
    pub origin_location: Vec3,
    /// View direction at baseline time (unit vector).
    pub origin_view_direction: Vec3,
    /// `true` if this spawn followed joining the world, `false` for a
    /// respawn after death.
    pub initial_spawn: bool,
}

impl ProtectionRecord {
    /// The minimum invincibility window for this record (ticks).
    #[must_use]
    pub const fn window(&self, config: &ProtectionConfig) -> Tick {
        config.window_for(self.initial_spawn)
    }

    /// Ticks elapsed since the baseline was captured.
    #[must_use]
    pub const fn elapsed(&self, now: Tick) -> Tick {
        now.saturating_sub(self.origin_tick)
    }
}

/// Mapping from player session to protection record.
///
/// Exactly one instance exists per process, owned by the service; it is
/// only ever touched from the simulation thread.
#[derive(Default)]
pub struct ProtectionRegistry {
    /// The records, keyed by player session.
    records: HashMap<PlayerId, ProtectionRecord>,
}

impl ProtectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any previous one for the same player.
    /// A player who respawns while still protected restarts their baseline.
    pub fn insert(&mut self, player: PlayerId, record: ProtectionRecord) {
        self.records.insert(player, record);
    }

    /// Removes a player's record, returning it if one existed.
    pub fn remove(&mut self, player: PlayerId) -> Option<ProtectionRecord> {
        self.records.remove(&player)
    }

    /// The record for a player, if protected.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&ProtectionRecord> {
        self.records.get(&player)
    }

    /// Whether a player is currently protected.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.records.contains_key(&player)
    }

    /// Visits every record in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &ProtectionRecord)> {
        self.records.iter()
    }

    /// Number of currently protected players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nobody is protected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
