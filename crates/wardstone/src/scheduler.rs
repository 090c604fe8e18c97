//! # Tick Scheduler
//!
//! Cooperative scheduling on the host's tick counter.
//!
//! ## Design
//!
//! The sanctuary feature never receives raw host callbacks; it registers
//! tasks against an explicit scheduler owned by the enclosing runtime. All
//! tasks run on the single simulation thread, one after another, inside
//! [`TickScheduler::advance`]. No locks, no suspension: every task must
//! complete within the tick budget.
//!
//! Tasks receive the shared context by mutable reference, which enforces
//! the single-writer-per-tick discipline at compile time.

use wardstone_shared::Tick;

/// A task that runs once.
type OnceTask<Ctx> = Box<dyn FnOnce(&mut Ctx, Tick)>;

/// A task that runs on a fixed period.
type RepeatingTask<Ctx> = Box<dyn FnMut(&mut Ctx, Tick)>;

/// Scheduling seam between the sanctuary feature and the host clock.
///
/// The host may substitute its own implementation; the provided
/// [`TickScheduler`] covers any host that steps its simulation one tick at
/// a time.
pub trait Scheduler<Ctx> {
    /// The current simulation tick.
    fn current_tick(&self) -> Tick;

    /// Runs `task` once, `delay` ticks from now. A zero delay fires on the
    /// next tick.
    fn schedule_once(&mut self, delay: Tick, task: impl FnOnce(&mut Ctx, Tick) + 'static);

    /// Runs `task` every `period` ticks, first firing `period` ticks from
    /// now.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    fn schedule_repeating(&mut self, period: Tick, task: impl FnMut(&mut Ctx, Tick) + 'static);

    /// Steps the clock by one tick and runs every task that came due.
    /// The driving loop calls this once per host tick.
    ///
    /// Returns the tick just executed.
    fn advance(&mut self, ctx: &mut Ctx) -> Tick;
}

/// A one-shot task waiting for its tick.
struct OneShot<Ctx> {
    /// Tick at which the task fires.
    due: Tick,
    /// The task itself.
    task: OnceTask<Ctx>,
}

/// A repeating task and its cadence.
struct Repeating<Ctx> {
    /// Next tick at which the task fires.
    next_due: Tick,
    /// Ticks between firings.
    period: Tick,
    /// The task itself.
    task: RepeatingTask<Ctx>,
}

/// Deterministic scheduler backed by a monotonic tick counter.
///
/// Within one tick, due one-shots run in schedule order, then repeating
/// tasks in registration order.
pub struct TickScheduler<Ctx> {
    /// The clock. Starts at zero, advances by one per `advance` call.
    tick: Tick,
    /// Pending one-shot tasks.
    one_shots: Vec<OneShot<Ctx>>,
    /// Registered repeating tasks.
    repeating: Vec<Repeating<Ctx>>,
}

impl<Ctx> TickScheduler<Ctx> {
    /// Creates a scheduler at tick zero with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick: 0,
            one_shots: Vec::new(),
            repeating: Vec::new(),
        }
    }

    /// Number of one-shot tasks still waiting.
    #[must_use]
    pub fn pending_one_shots(&self) -> usize {
        self.one_shots.len()
    }
}

impl<Ctx> Scheduler<Ctx> for TickScheduler<Ctx> {
    fn current_tick(&self) -> Tick {
        self.tick
    }

    fn schedule_once(&mut self, delay: Tick, task: impl FnOnce(&mut Ctx, Tick) + 'static) {
        self.one_shots.push(OneShot {
            due: self.tick + delay,
            task: Box::new(task),
        });
    }

    fn schedule_repeating(&mut self, period: Tick, task: impl FnMut(&mut Ctx, Tick) + 'static) {
        assert!(period > 0, "repeating task with zero period would never rest");
        self.repeating.push(Repeating {
            next_due: self.tick + period,
            period,
            task: Box::new(task),
        });
    }

    fn advance(&mut self, ctx: &mut Ctx) -> Tick {
        self.tick += 1;
        let now = self.tick;

        // One-shots fire first, in the order they were scheduled.
        let mut pending = Vec::with_capacity(self.one_shots.len());
        for shot in self.one_shots.drain(..) {
            if shot.due <= now {
                (shot.task)(ctx, now);
            } else {
                pending.push(shot);
            }
        }
        self.one_shots = pending;

        for rep in &mut self.repeating {
            if rep.next_due <= now {
                (rep.task)(ctx, now);
                rep.next_due += rep.period;
            }
        }

        now
    }
}

impl<Ctx> Default for TickScheduler<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test context: a log of (label, tick) firings.
    type Log = Vec<(&'static str, Tick)>;

    #[test]
    fn test_one_shot_fires_exactly_once() {
        let mut scheduler: TickScheduler<Log> = TickScheduler::new();
        let mut log = Log::new();

        scheduler.schedule_once(3, |log, now| log.push(("shot", now)));

        for _ in 0..10 {
            scheduler.advance(&mut log);
        }

        assert_eq!(log, vec![("shot", 3)]);
        assert_eq!(scheduler.pending_one_shots(), 0);
    }

    #[test]
    fn test_zero_delay_fires_next_tick() {
        let mut scheduler: TickScheduler<Log> = TickScheduler::new();
        let mut log = Log::new();

        scheduler.schedule_once(0, |log, now| log.push(("shot", now)));
        scheduler.advance(&mut log);

        assert_eq!(log, vec![("shot", 1)]);
    }

    #[test]
    fn test_repeating_cadence() {
        let mut scheduler: TickScheduler<Log> = TickScheduler::new();
        let mut log = Log::new();

        scheduler.schedule_repeating(4, |log, now| log.push(("sweep", now)));

        for _ in 0..12 {
            scheduler.advance(&mut log);
        }

        assert_eq!(log, vec![("sweep", 4), ("sweep", 8), ("sweep", 12)]);
    }

    #[test]
    fn test_one_shots_run_before_repeating() {
        let mut scheduler: TickScheduler<Log> = TickScheduler::new();
        let mut log = Log::new();

        scheduler.schedule_repeating(4, |log, now| log.push(("sweep", now)));
        scheduler.schedule_once(4, |log, now| log.push(("baseline", now)));

        for _ in 0..4 {
            scheduler.advance(&mut log);
        }

        assert_eq!(log, vec![("baseline", 4), ("sweep", 4)]);
    }

    #[test]
    fn test_delay_is_relative_to_schedule_time() {
        let mut scheduler: TickScheduler<Log> = TickScheduler::new();
        let mut log = Log::new();

        for _ in 0..100 {
            scheduler.advance(&mut log);
        }
        scheduler.schedule_once(4, |log, now| log.push(("shot", now)));
        for _ in 0..8 {
            scheduler.advance(&mut log);
        }

        assert_eq!(log, vec![("shot", 104)]);
    }

    #[test]
    #[should_panic(expected = "zero period")]
    fn test_zero_period_rejected() {
        let mut scheduler: TickScheduler<Log> = TickScheduler::new();
        scheduler.schedule_repeating(0, |_, _| {});
    }
}
