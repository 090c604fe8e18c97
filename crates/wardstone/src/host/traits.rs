//! # Host Trait Seams
//!
//! The three capabilities the sanctuary feature needs from its host, plus
//! a mock world for tests.
//!
//! All three are synchronous and must complete within the tick budget; the
//! feature calls them only from the simulation thread.

use std::collections::HashMap;

use wardstone_shared::{EntityId, PlayerId, Tick, Vec3};

// ============================================================================
// PLAYER STATE
// ============================================================================

/// Snapshot of a live player's state, read in one tick.
#[derive(Clone, Copy, Debug)]
pub struct PlayerSnapshot {
    /// Current position.
    pub position: Vec3,
    /// Current view direction (unit vector).
    pub view_direction: Vec3,
    /// Player is holding the sneak control.
    pub sneaking: bool,
    /// Player is playing an emote.
    pub emoting: bool,
    /// Player is jumping.
    pub jumping: bool,
}

impl PlayerSnapshot {
    /// Creates a snapshot of a player standing still.
    #[must_use]
    pub const fn new(position: Vec3, view_direction: Vec3) -> Self {
        Self {
            position,
            view_direction,
            sneaking: false,
            emoting: false,
            jumping: false,
        }
    }
}

/// Read access to live player state.
///
/// `None` means the player is no longer present on the server. Callers
/// treat that as an eviction trigger, never as an error.
pub trait PlayerAccess {
    /// Reads a snapshot of a player's state, if the player is present.
    fn player(&self, id: PlayerId) -> Option<PlayerSnapshot>;
}

// ============================================================================
// STATUS EFFECTS
// ============================================================================

/// The named status effects the sanctuary applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Reduces all incoming damage.
    DamageResistance,
    /// Hides the player from creature targeting.
    Invisibility,
    /// Nullifies fire and lava damage.
    FireResistance,
}

impl EffectKind {
    /// Returns the host-side effect identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EffectKind::DamageResistance => "resistance",
            EffectKind::Invisibility => "invisibility",
            EffectKind::FireResistance => "fire_resistance",
        }
    }
}

/// One status effect application.
#[derive(Clone, Copy, Debug)]
pub struct EffectApplication {
    /// Which effect to apply.
    pub kind: EffectKind,
    /// How long the effect lasts (ticks).
    pub duration: Tick,
    /// Effect strength; the host clamps to its maximum effective level.
    pub amplifier: u8,
    /// Whether the host renders effect particles on the player.
    pub show_particles: bool,
}

/// Write access to player status effects.
pub trait StatusEffects {
    /// Applies a named status effect. Re-applying the same effect
    /// refreshes its timer; effects never stack.
    fn apply_effect(&mut self, id: PlayerId, effect: EffectApplication);
}

// ============================================================================
// SPATIAL QUERIES & IMPULSES
// ============================================================================

/// Entity families the spatial query can filter on. An entity may belong
/// to several families at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityFamily {
    /// Creatures that can approach and attack.
    Mob,
    /// Creatures that never attack.
    Passive,
    /// Non-living entities (armor stands, minecarts, markers).
    Inanimate,
}

/// A creature query around a point.
#[derive(Clone, Debug)]
pub struct CreatureQuery {
    /// Center of the query sphere.
    pub center: Vec3,
    /// Query radius (blocks).
    pub max_distance: f32,
    /// Family an entity must belong to.
    pub family: EntityFamily,
    /// Families that disqualify an entity even if it matches `family`.
    pub exclude: Vec<EntityFamily>,
}

impl CreatureQuery {
    /// Query for hostile-capable creatures around a point: mobs, minus
    /// anything inanimate or passive.
    #[must_use]
    pub fn hostiles_around(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            max_distance: radius,
            family: EntityFamily::Mob,
            exclude: vec![EntityFamily::Inanimate, EntityFamily::Passive],
        }
    }

    /// Whether an entity at `position` with the given families matches.
    #[must_use]
    pub fn matches(&self, position: Vec3, families: &[EntityFamily]) -> bool {
        position.distance_squared(self.center) <= self.max_distance * self.max_distance
            && families.contains(&self.family)
            && !families.iter().any(|f| self.exclude.contains(f))
    }
}

/// A creature returned by a spatial query.
#[derive(Clone, Copy, Debug)]
pub struct NearbyCreature {
    /// The creature's identity, valid for impulse application this tick.
    pub id: EntityId,
    /// The creature's current position.
    pub position: Vec3,
}

/// Spatial enumeration and knockback.
pub trait CreatureProximity {
    /// Enumerates creatures matching `query`, in unspecified order.
    fn creatures_near(&self, query: &CreatureQuery) -> Vec<NearbyCreature>;

    /// Applies a physical impulse to a creature. Unknown ids are ignored.
    fn apply_impulse(&mut self, id: EntityId, impulse: Vec3);
}

// ============================================================================
// MOCK IMPLEMENTATION (For Testing)
// ============================================================================

/// A creature living in the [`MockWorld`].
#[derive(Clone, Debug)]
pub struct MockCreature {
    /// The creature's identity.
    pub id: EntityId,
    /// The creature's position.
    pub position: Vec3,
    /// Families the creature belongs to.
    pub families: Vec<EntityFamily>,
}

/// A status effect as the mock host recorded it.
#[derive(Clone, Copy, Debug)]
pub struct AppliedEffect {
    /// Remaining duration from the most recent application (ticks).
    pub duration: Tick,
    /// Amplifier from the most recent application.
    pub amplifier: u8,
    /// Particle flag from the most recent application.
    pub show_particles: bool,
}

/// In-memory host implementing all three seams for tests.
///
/// Effects follow refresh-not-stack semantics like a real host: one active
/// instance per (player, kind), overwritten on re-application. Every
/// application and impulse is recorded for assertions.
#[derive(Default)]
pub struct MockWorld {
    /// Present players.
    players: HashMap<PlayerId, PlayerSnapshot>,
    /// Creatures in the world.
    creatures: Vec<MockCreature>,
    /// Active effect instances.
    effects: HashMap<(PlayerId, EffectKind), AppliedEffect>,
    /// Total number of `apply_effect` calls ever made.
    total_applications: usize,
    /// Every impulse each creature has received, in order.
    impulses: HashMap<EntityId, Vec<Vec3>>,
}

impl MockWorld {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player standing still at `position`, looking along
    /// `view_direction`.
    pub fn add_player(&mut self, id: PlayerId, position: Vec3, view_direction: Vec3) {
        self.players
            .insert(id, PlayerSnapshot::new(position, view_direction));
    }

    /// Mutable access to a player's state, for simulating input.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerSnapshot> {
        self.players.get_mut(&id)
    }

    /// Removes a player, as if they disconnected.
    pub fn remove_player(&mut self, id: PlayerId) {
        self.players.remove(&id);
    }

    /// Adds a creature.
    pub fn add_creature(&mut self, id: EntityId, position: Vec3, families: &[EntityFamily]) {
        self.creatures.push(MockCreature {
            id,
            position,
            families: families.to_vec(),
        });
    }

    /// Mutable access to a creature, for moving it between ticks.
    pub fn creature_mut(&mut self, id: EntityId) -> Option<&mut MockCreature> {
        self.creatures.iter_mut().find(|c| c.id == id)
    }

    /// The active effect instance for a (player, kind), if any.
    #[must_use]
    pub fn active_effect(&self, id: PlayerId, kind: EffectKind) -> Option<AppliedEffect> {
        self.effects.get(&(id, kind)).copied()
    }

    /// Number of distinct effect kinds active on a player.
    #[must_use]
    pub fn active_effect_count(&self, id: PlayerId) -> usize {
        self.effects.keys().filter(|(p, _)| *p == id).count()
    }

    /// Total `apply_effect` calls made against this world.
    #[must_use]
    pub fn total_applications(&self) -> usize {
        self.total_applications
    }

    /// Every impulse a creature has received, oldest first.
    #[must_use]
    pub fn impulses_for(&self, id: EntityId) -> &[Vec3] {
        self.impulses.get(&id).map_or(&[], Vec::as_slice)
    }
}

impl PlayerAccess for MockWorld {
    fn player(&self, id: PlayerId) -> Option<PlayerSnapshot> {
        self.players.get(&id).copied()
    }
}

impl StatusEffects for MockWorld {
    fn apply_effect(&mut self, id: PlayerId, effect: EffectApplication) {
        self.total_applications += 1;
        self.effects.insert(
            (id, effect.kind),
            AppliedEffect {
                duration: effect.duration,
                amplifier: effect.amplifier,
                show_particles: effect.show_particles,
            },
        );
    }
}

impl CreatureProximity for MockWorld {
    fn creatures_near(&self, query: &CreatureQuery) -> Vec<NearbyCreature> {
        self.creatures
            .iter()
            .filter(|c| query.matches(c.position, &c.families))
            .map(|c| NearbyCreature {
                id: c.id,
                position: c.position,
            })
            .collect()
    }

    fn apply_impulse(&mut self, id: EntityId, impulse: Vec3) {
        self.impulses.entry(id).or_default().push(impulse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_filters_family_and_distance() {
        let query = CreatureQuery::hostiles_around(Vec3::ZERO, 3.0);

        assert!(query.matches(Vec3::new(1.0, 0.0, 1.0), &[EntityFamily::Mob]));
        // Exactly on the boundary counts.
        assert!(query.matches(Vec3::new(3.0, 0.0, 0.0), &[EntityFamily::Mob]));
        // Too far.
        assert!(!query.matches(Vec3::new(3.5, 0.0, 0.0), &[EntityFamily::Mob]));
        // Wrong family.
        assert!(!query.matches(Vec3::ZERO, &[EntityFamily::Passive]));
        // Mob tag does not save an excluded entity.
        assert!(!query.matches(Vec3::ZERO, &[EntityFamily::Mob, EntityFamily::Inanimate]));
        assert!(!query.matches(Vec3::ZERO, &[EntityFamily::Mob, EntityFamily::Passive]));
    }

    #[test]
    fn test_mock_effects_refresh_not_stack() {
        let mut world = MockWorld::new();
        let player = PlayerId(1);
        world.add_player(player, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        for duration in [60, 20] {
            world.apply_effect(
                player,
                EffectApplication {
                    kind: EffectKind::Invisibility,
                    duration,
                    amplifier: 99,
                    show_particles: false,
                },
            );
        }

        assert_eq!(world.active_effect_count(player), 1);
        let active = world.active_effect(player, EffectKind::Invisibility).unwrap();
        assert_eq!(active.duration, 20);
        assert_eq!(world.total_applications(), 2);
    }

    #[test]
    fn test_mock_player_liveness() {
        let mut world = MockWorld::new();
        let player = PlayerId(9);
        world.add_player(player, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(world.player(player).is_some());

        world.remove_player(player);
        assert!(world.player(player).is_none());
    }

    #[test]
    fn test_effect_names_match_host_identifiers() {
        assert_eq!(EffectKind::DamageResistance.name(), "resistance");
        assert_eq!(EffectKind::Invisibility.name(), "invisibility");
        assert_eq!(EffectKind::FireResistance.name(), "fire_resistance");
    }
}
