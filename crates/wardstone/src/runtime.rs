//! # Sanctuary Runtime
//!
//! Wires the pieces together against a live host:
//!
//! ```text
//! Tick N:
//! ┌─────────────────────────────────────────────────────────────┐
//! │ 1. DRAIN EVENTS                                             │
//! │    ├─ PlayerSpawned: immediate grant                        │
//! │    └─           ...: schedule baseline capture (+4 ticks)   │
//! │                                                             │
//! │ 2. ADVANCE SCHEDULER                                        │
//! │    ├─ due baseline captures insert registry records         │
//! │    └─ every 4th tick: sweep (evict or refresh)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host calls [`ProtectionRuntime::tick`] once per simulation tick
//! from its game loop. Registry mutation happens only inside the two
//! scheduled callback sites, on that same thread.

use wardstone_shared::{Tick, WorldEvent};

use crate::config::ProtectionConfig;
use crate::events::EventReceiver;
use crate::host::{CreatureProximity, PlayerAccess, StatusEffects};
use crate::protection::SpawnProtection;
use crate::scheduler::Scheduler;

/// Everything scheduled tasks may touch: the host world and the
/// protection state. Handed to tasks by mutable reference, which is what
/// enforces the single-writer-per-tick discipline.
pub struct WorldCtx<H> {
    /// The host world seams.
    pub host: H,
    /// The protection service.
    pub protection: SpawnProtection,
}

/// The sanctuary feature, assembled and ready to tick.
pub struct ProtectionRuntime<H, S> {
    /// Shared context for scheduled tasks.
    ctx: WorldCtx<H>,
    /// Task scheduler driven by [`Self::tick`].
    scheduler: S,
    /// World events from the host.
    events: EventReceiver,
}

impl<H, S> ProtectionRuntime<H, S>
where
    H: PlayerAccess + StatusEffects + CreatureProximity + 'static,
    S: Scheduler<WorldCtx<H>>,
{
    /// Assembles the runtime and subscribes the periodic sweep.
    #[must_use]
    pub fn new(host: H, config: ProtectionConfig, mut scheduler: S, events: EventReceiver) -> Self {
        scheduler.schedule_repeating(
            config.sweep_interval_ticks,
            |ctx: &mut WorldCtx<H>, now| {
                let WorldCtx { host, protection } = ctx;
                protection.sweep(host, now);
            },
        );

        Self {
            ctx: WorldCtx {
                host,
                protection: SpawnProtection::new(config),
            },
            scheduler,
            events,
        }
    }

    /// Runs one simulation tick: drains world events, then advances the
    /// scheduler. Returns the tick just executed.
    pub fn tick(&mut self) -> Tick {
        for event in self.events.drain() {
            match event {
                WorldEvent::PlayerSpawned {
                    player,
                    initial_spawn,
                } => {
                    let WorldCtx { host, protection } = &mut self.ctx;
                    protection.on_player_spawn(host, player, initial_spawn);

                    // Baseline capture waits out the spawn transition.
                    let delay = protection.config().baseline_delay_ticks;
                    self.scheduler
                        .schedule_once(delay, move |ctx: &mut WorldCtx<H>, now| {
                            ctx.protection
                                .capture_baseline(&ctx.host, player, initial_spawn, now);
                        });
                }
                WorldEvent::PlayerDeparted { player } => {
                    // No registry action; the sweep's liveness check
                    // observes departures on its own.
                    tracing::debug!("{} departed", player);
                }
            }
        }

        self.scheduler.advance(&mut self.ctx)
    }

    /// Runs `ticks` simulation ticks back to back.
    pub fn run_for(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// The current simulation tick.
    #[must_use]
    pub fn current_tick(&self) -> Tick {
        self.scheduler.current_tick()
    }

    /// Read access to the host world.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.ctx.host
    }

    /// Mutable access to the host world, for simulating player input
    /// between ticks.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.ctx.host
    }

    /// Read access to the protection service.
    #[must_use]
    pub fn protection(&self) -> &SpawnProtection {
        &self.ctx.protection
    }
}
