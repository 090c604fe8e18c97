//! # Protective Effect Application
//!
//! Makes a player untouchable for a bounded duration: three simultaneous
//! status effects, plus an outward shove for any hostile creature that had
//! already begun an attack approach.
//!
//! The operation is idempotent: repeated grants refresh the effect timers
//! and re-trigger the pushback, nothing stacks.

use wardstone_shared::constants::SANCTUARY_AMPLIFIER;
use wardstone_shared::{PlayerId, Tick};

use crate::host::{
    CreatureProximity, CreatureQuery, EffectApplication, EffectKind, PlayerAccess, StatusEffects,
};

/// The three effects every grant applies, together.
pub const SANCTUARY_EFFECTS: [EffectKind; 3] = [
    EffectKind::DamageResistance,
    EffectKind::Invisibility,
    EffectKind::FireResistance,
];

/// Grants the full protective package to a player for `duration` ticks.
///
/// Applies each of [`SANCTUARY_EFFECTS`] at maximum amplifier with
/// particles suppressed, then pushes every hostile creature within
/// `radius` blocks away from the player's current position. The impulse
/// is the raw offset from player to creature; its magnitude grows with
/// distance.
///
/// Returns `false` without side effects if the player has already left.
pub fn grant_protection<H>(host: &mut H, player: PlayerId, duration: Tick, radius: f32) -> bool
where
    H: PlayerAccess + StatusEffects + CreatureProximity,
{
    // Liveness check: acting on a departed player is a silent no-op.
    let snapshot = match host.player(player) {
        Some(snapshot) => snapshot,
        None => return false,
    };

    for kind in SANCTUARY_EFFECTS {
        host.apply_effect(
            player,
            EffectApplication {
                kind,
                duration,
                amplifier: SANCTUARY_AMPLIFIER,
                show_particles: false,
            },
        );
    }

    // Pushback is recomputed from where the player stands NOW, not from
    // the spawn baseline.
    let query = CreatureQuery::hostiles_around(snapshot.position, radius);
    for creature in host.creatures_near(&query) {
        host.apply_impulse(creature.id, creature.position - snapshot.position);
    }

    true
}
