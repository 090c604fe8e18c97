//! Identifier and time types for the sanctuary system.
//!
//! The host assigns identifiers; this crate only gives them names so the
//! registry cannot confuse a player key with a creature key.

use serde::{Deserialize, Serialize};

/// One discrete step of the host game loop. The only unit of time the
/// sanctuary system knows about.
pub type Tick = u64;

/// Stable per-session player identifier.
///
/// Valid for the lifetime of one connection; a rejoining player gets a
/// fresh id. The registry is keyed by this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player:{}", self.0)
    }
}

/// Identifier for a non-player entity (creatures, and anything else the
/// spatial query can return).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct_types() {
        let player = PlayerId(7);
        let entity = EntityId(7);
        assert_eq!(player.to_string(), "player:7");
        assert_eq!(entity.to_string(), "entity:7");
    }
}
