//! # Sweep Verdicts
//!
//! Per-record eviction logic evaluated by the periodic sweep.
//!
//! ## Rules
//!
//! - A player who cannot be read anymore has left; their record is evicted
//!   immediately, window or not.
//! - The invincibility window is a hard floor: before it elapses, no input
//!   can end protection.
//! - After the window, protection persists exactly as long as the player
//!   stays bit-identical to their baseline and performs no action. A
//!   player parked on the spawn point (lag, menu focus) stays protected
//!   indefinitely.

use wardstone_shared::Tick;

use crate::config::ProtectionConfig;
use crate::host::PlayerSnapshot;
use crate::protection::registry::ProtectionRecord;

/// Why a record was evicted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvictionReason {
    /// The player is no longer present on the server.
    Departed,
    /// The window elapsed and the player moved, looked around, or acted.
    LeftBaseline,
}

impl std::fmt::Display for EvictionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvictionReason::Departed => write!(f, "departed"),
            EvictionReason::LeftBaseline => write!(f, "left baseline"),
        }
    }
}

/// Outcome of evaluating one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepVerdict {
    /// Keep the record and refresh the player's effects.
    Retain,
    /// Remove the record; no further effects for this player.
    Evict(EvictionReason),
}

/// Evaluates one record against the player's live state.
#[must_use]
pub fn evaluate_record(
    record: &ProtectionRecord,
    snapshot: Option<&PlayerSnapshot>,
    now: Tick,
    config: &ProtectionConfig,
) -> SweepVerdict {
    let snapshot = match snapshot {
        Some(snapshot) => snapshot,
        None => return SweepVerdict::Evict(EvictionReason::Departed),
    };

    if record.elapsed(now) > record.window(config) && has_left_baseline(record, snapshot) {
        SweepVerdict::Evict(EvictionReason::LeftBaseline)
    } else {
        SweepVerdict::Retain
    }
}

/// Whether the player has moved, looked around, or acted since baseline.
///
/// Position and view direction use exact comparison, not a distance
/// threshold; the original behavior is preserved deliberately.
#[must_use]
pub fn has_left_baseline(record: &ProtectionRecord, snapshot: &PlayerSnapshot) -> bool {
    snapshot.position != record.origin_location
        || snapshot.view_direction != record.origin_view_direction
        || snapshot.sneaking
        || snapshot.emoting
        || snapshot.jumping
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardstone_shared::Vec3;

    const ORIGIN: Vec3 = Vec3::new(8.0, 64.0, -3.0);
    const VIEW: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    fn record(initial_spawn: bool) -> ProtectionRecord {
        ProtectionRecord {
            origin_tick: 4,
            origin_location: ORIGIN,
            origin_view_direction: VIEW,
            initial_spawn,
        }
    }

    fn still() -> PlayerSnapshot {
        PlayerSnapshot::new(ORIGIN, VIEW)
    }

    #[test]
    fn test_departed_evicts_regardless_of_window() {
        let config = ProtectionConfig::default();
        // Inside the window, player gone: still evicted.
        assert_eq!(
            evaluate_record(&record(true), None, 8, &config),
            SweepVerdict::Evict(EvictionReason::Departed)
        );
    }

    #[test]
    fn test_window_is_a_hard_floor() {
        let config = ProtectionConfig::default();
        let mut snapshot = still();
        snapshot.sneaking = true;
        snapshot.position = ORIGIN + Vec3::new(5.0, 0.0, 0.0);

        // Respawn window is 60; at tick 50 (elapsed 46) nothing can evict.
        assert_eq!(
            evaluate_record(&record(false), Some(&snapshot), 50, &config),
            SweepVerdict::Retain
        );
        // Elapsed must strictly exceed the window.
        assert_eq!(
            evaluate_record(&record(false), Some(&snapshot), 64, &config),
            SweepVerdict::Retain
        );
        assert_eq!(
            evaluate_record(&record(false), Some(&snapshot), 65, &config),
            SweepVerdict::Evict(EvictionReason::LeftBaseline)
        );
    }

    #[test]
    fn test_motionless_player_never_times_out() {
        let config = ProtectionConfig::default();
        let snapshot = still();
        for now in [100, 1_000, 1_000_000] {
            assert_eq!(
                evaluate_record(&record(true), Some(&snapshot), now, &config),
                SweepVerdict::Retain
            );
        }
    }

    #[test]
    fn test_each_trigger_evicts_past_window() {
        let config = ProtectionConfig::default();
        let past_window = 100; // elapsed 96 > 80 for initial spawns

        let triggers: [fn(&mut PlayerSnapshot); 5] = [
            |s| s.position = s.position + Vec3::new(0.1, 0.0, 0.0),
            |s| s.view_direction = Vec3::new(1.0, 0.0, 0.0),
            |s| s.sneaking = true,
            |s| s.emoting = true,
            |s| s.jumping = true,
        ];

        for trigger in triggers {
            let mut snapshot = still();
            trigger(&mut snapshot);
            assert_eq!(
                evaluate_record(&record(true), Some(&snapshot), past_window, &config),
                SweepVerdict::Evict(EvictionReason::LeftBaseline)
            );
        }
    }

    #[test]
    fn test_time_alone_is_not_sufficient() {
        let config = ProtectionConfig::default();
        let snapshot = still();
        // Far past the window, but the trigger side is false.
        assert_eq!(
            evaluate_record(&record(true), Some(&snapshot), 10_000, &config),
            SweepVerdict::Retain
        );
    }

    #[test]
    fn test_sub_epsilon_movement_counts() {
        let mut snapshot = still();
        snapshot.position = ORIGIN + Vec3::new(f32::EPSILON, 0.0, 0.0);
        assert!(has_left_baseline(&record(true), &snapshot));
    }
}
