//! # WARDSTONE
//!
//! Temporary spawn invincibility for block-world game servers.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                        HOST GAME SERVER                            │
//! │                                                                    │
//! │   spawn/depart events           one call per simulation tick       │
//! │         │                                │                         │
//! │         v                                v                         │
//! │  ┌─────────────┐              ┌─────────────────────┐              │
//! │  │  EventBus   │─────────────>│  ProtectionRuntime  │              │
//! │  └─────────────┘              │                     │              │
//! │                               │  ┌───────────────┐  │              │
//! │                               │  │ TickScheduler │  │              │
//! │                               │  └──────┬────────┘  │              │
//! │                               │         v           │              │
//! │                               │  ┌───────────────┐  │              │
//! │                               │  │SpawnProtection│  │              │
//! │                               │  │  (registry)   │  │              │
//! │                               │  └──────┬────────┘  │              │
//! │                               └─────────┼───────────┘              │
//! │                                         v                          │
//! │                    host seams: PlayerAccess, StatusEffects,        │
//! │                                CreatureProximity                   │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Behavior
//!
//! A spawning player immediately receives damage resistance, invisibility
//! and fire resistance, and nearby hostile creatures are shoved away. Four
//! ticks later their position and view direction are captured as a
//! baseline. Every fourth tick the sweep visits all protected players:
//! whoever moved, looked around, or acted after their minimum
//! invincibility window is evicted; everyone else has their effects
//! refreshed. A player who never touches the controls stays protected
//! indefinitely.
//!
//! ## Example
//!
//! ```rust,ignore
//! use wardstone::{EventBus, ProtectionConfig, ProtectionRuntime, TickScheduler};
//!
//! let (events, receiver) = EventBus::create_pair(256);
//! let mut runtime = ProtectionRuntime::new(
//!     my_host_world,
//!     ProtectionConfig::load("wardstone.toml")?,
//!     TickScheduler::new(),
//!     receiver,
//! );
//!
//! // In the server's game loop, once per tick:
//! runtime.tick();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod protection;
pub mod runtime;
pub mod scheduler;

// Re-export the shared types under a short name.
pub use wardstone_shared as shared;

// Re-export the commonly used surface.
pub use config::ProtectionConfig;
pub use error::ConfigError;
pub use events::{EventBus, EventReceiver, EventSender};
pub use protection::{ProtectionRecord, ProtectionRegistry, SpawnProtection};
pub use runtime::{ProtectionRuntime, WorldCtx};
pub use scheduler::{Scheduler, TickScheduler};
