//! # Spawn Protection Service
//!
//! The protection state machine: owns the registry, reacts to spawns, and
//! runs the periodic sweep.
//!
//! The service holds no scheduler and performs no I/O; the enclosing
//! runtime calls into it from exactly two callback sites (the delayed
//! baseline capture and the repeating sweep), both on the simulation
//! thread. That is the whole concurrency story.

use wardstone_shared::{PlayerId, Tick};

use crate::config::ProtectionConfig;
use crate::host::{CreatureProximity, PlayerAccess, StatusEffects};
use crate::protection::effects::grant_protection;
use crate::protection::registry::{ProtectionRecord, ProtectionRegistry};
use crate::protection::sweep::{evaluate_record, EvictionReason, SweepVerdict};

/// Spawn protection state for one world.
pub struct SpawnProtection {
    /// Currently protected players.
    registry: ProtectionRegistry,
    /// Timing tunables, fixed at startup.
    config: ProtectionConfig,
}

impl SpawnProtection {
    /// Creates a service with no protected players.
    #[must_use]
    pub fn new(config: ProtectionConfig) -> Self {
        Self {
            registry: ProtectionRegistry::new(),
            config,
        }
    }

    /// Reacts to a spawn event: grants the immediate protection window.
    ///
    /// The baseline is NOT captured here; the runtime schedules
    /// [`Self::capture_baseline`] a few ticks later, past the spawn
    /// transition.
    pub fn on_player_spawn<H>(&mut self, host: &mut H, player: PlayerId, initial_spawn: bool)
    where
        H: PlayerAccess + StatusEffects + CreatureProximity,
    {
        let duration = self.config.grant_for(initial_spawn);
        if grant_protection(host, player, duration, self.config.pushback_radius) {
            tracing::info!(
                "{} spawned (initial: {}), sanctuary granted for {} ticks",
                player,
                initial_spawn,
                duration
            );
        } else {
            tracing::warn!("spawn event for absent {}, nothing granted", player);
        }
    }

    /// Captures a player's baseline and registers them for sweeping.
    ///
    /// Runs as a delayed one-shot. A player who left during the delay is
    /// skipped silently; they never gain a record.
    pub fn capture_baseline<H: PlayerAccess>(
        &mut self,
        host: &H,
        player: PlayerId,
        initial_spawn: bool,
        now: Tick,
    ) {
        let snapshot = match host.player(player) {
            Some(snapshot) => snapshot,
            None => {
                tracing::debug!("{} left before baseline capture", player);
                return;
            }
        };

        self.registry.insert(
            player,
            ProtectionRecord {
                origin_tick: now,
                origin_location: snapshot.position,
                origin_view_direction: snapshot.view_direction,
                initial_spawn,
            },
        );
        tracing::debug!("baseline recorded for {} at tick {}", player, now);
    }

    /// One pass over the registry: evict lapsed records, refresh the rest.
    ///
    /// Evicted players get no further effects; survivors are re-granted
    /// the sweep duration so their effects never visibly lapse.
    pub fn sweep<H>(&mut self, host: &mut H, now: Tick)
    where
        H: PlayerAccess + StatusEffects + CreatureProximity,
    {
        let mut evicted: Vec<(PlayerId, EvictionReason)> = Vec::new();
        let mut retained: Vec<PlayerId> = Vec::new();

        for (player, record) in self.registry.iter() {
            let snapshot = host.player(*player);
            match evaluate_record(record, snapshot.as_ref(), now, &self.config) {
                SweepVerdict::Evict(reason) => evicted.push((*player, reason)),
                SweepVerdict::Retain => retained.push(*player),
            }
        }

        for (player, reason) in evicted {
            self.registry.remove(player);
            tracing::info!("sanctuary ended for {} at tick {} ({})", player, now, reason);
        }

        for player in retained {
            grant_protection(
                host,
                player,
                self.config.sweep_grant_ticks,
                self.config.pushback_radius,
            );
        }
    }

    /// Whether a player currently has a protection record.
    #[must_use]
    pub fn is_protected(&self, player: PlayerId) -> bool {
        self.registry.contains(player)
    }

    /// The protection record for a player, if any.
    #[must_use]
    pub fn record(&self, player: PlayerId) -> Option<&ProtectionRecord> {
        self.registry.get(player)
    }

    /// Number of currently protected players.
    #[must_use]
    pub fn protected_count(&self) -> usize {
        self.registry.len()
    }

    /// The service's timing configuration.
    #[must_use]
    pub fn config(&self) -> &ProtectionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockWorld;
    use wardstone_shared::Vec3;

    const SPAWN: Vec3 = Vec3::new(0.5, 65.0, 0.5);
    const VIEW: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    fn setup(player: PlayerId) -> (SpawnProtection, MockWorld) {
        let mut world = MockWorld::new();
        world.add_player(player, SPAWN, VIEW);
        (SpawnProtection::new(ProtectionConfig::default()), world)
    }

    #[test]
    fn test_spawn_grant_durations_by_kind() {
        let player = PlayerId(1);

        let (mut service, mut world) = setup(player);
        service.on_player_spawn(&mut world, player, true);
        assert_eq!(
            world
                .active_effect(player, crate::host::EffectKind::DamageResistance)
                .unwrap()
                .duration,
            60
        );

        let (mut service, mut world) = setup(player);
        service.on_player_spawn(&mut world, player, false);
        assert_eq!(
            world
                .active_effect(player, crate::host::EffectKind::DamageResistance)
                .unwrap()
                .duration,
            40
        );
    }

    #[test]
    fn test_baseline_captures_live_state() {
        let player = PlayerId(1);
        let (mut service, world) = setup(player);

        service.capture_baseline(&world, player, true, 4);

        let record = service.record(player).unwrap();
        assert_eq!(record.origin_tick, 4);
        assert_eq!(record.origin_location, SPAWN);
        assert_eq!(record.origin_view_direction, VIEW);
        assert!(record.initial_spawn);
    }

    #[test]
    fn test_baseline_skips_departed_player() {
        let player = PlayerId(1);
        let (mut service, mut world) = setup(player);
        world.remove_player(player);

        service.capture_baseline(&world, player, true, 4);

        assert!(!service.is_protected(player));
        assert_eq!(service.protected_count(), 0);
    }

    #[test]
    fn test_sweep_refreshes_survivors_with_sweep_grant() {
        let player = PlayerId(1);
        let (mut service, mut world) = setup(player);
        service.capture_baseline(&world, player, true, 4);

        service.sweep(&mut world, 8);

        assert!(service.is_protected(player));
        assert_eq!(
            world
                .active_effect(player, crate::host::EffectKind::Invisibility)
                .unwrap()
                .duration,
            20
        );
    }

    #[test]
    fn test_sweep_evicts_departed_without_effects() {
        let player = PlayerId(1);
        let (mut service, mut world) = setup(player);
        service.capture_baseline(&world, player, true, 4);
        world.remove_player(player);

        service.sweep(&mut world, 8);

        assert!(!service.is_protected(player));
        assert_eq!(world.total_applications(), 0);
    }

    #[test]
    fn test_sweep_does_not_refresh_evicted_player() {
        let player = PlayerId(1);
        let (mut service, mut world) = setup(player);
        service.capture_baseline(&world, player, true, 4);

        // Past the window and moved: evicted, and the eviction sweep must
        // not hand out one last grant.
        world.player_mut(player).unwrap().position = SPAWN + Vec3::new(1.0, 0.0, 0.0);
        service.sweep(&mut world, 100);

        assert!(!service.is_protected(player));
        assert_eq!(world.total_applications(), 0);
    }
}
