//! World event types delivered by the host.
//!
//! The host emits one event per player join, respawn, and departure. The
//! sanctuary feature consumes `PlayerSpawned`; departures are observed
//! through the liveness check during the sweep, so `PlayerDeparted`
//! requires no registry action.

use crate::ids::PlayerId;
use serde::{Deserialize, Serialize};

/// Events the host delivers to gameplay features.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WorldEvent {
    /// A player entered the world, either by joining or by respawning
    /// after death. Delivered once per spawn.
    PlayerSpawned {
        /// The player that spawned.
        player: PlayerId,
        /// `true` if this spawn followed joining the world, `false` for a
        /// respawn after death. Affects grant and window durations.
        initial_spawn: bool,
    },

    /// A player left the world. After this, reads of the player's state
    /// return nothing.
    PlayerDeparted {
        /// The player that left.
        player: PlayerId,
    },
}
