//! # World Event Bus
//!
//! Delivery channel for host world events.
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌──────────────────┐
//! │    Host     │─────>│   Event     │─────>│    Sanctuary     │
//! │ (sim loop)  │      │   Channel   │      │    Runtime       │
//! └─────────────┘      └─────────────┘      └──────────────────┘
//! ```
//!
//! Events flow FROM the host TO the sanctuary runtime, which drains them
//! at the start of every tick on the simulation thread. Uses a bounded
//! crossbeam channel so a stalled consumer can never grow memory.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use wardstone_shared::WorldEvent;

/// Event bus between the host and the sanctuary runtime.
///
/// Pre-allocates a bounded channel; spawn bursts beyond the capacity are
/// dropped rather than blocking the host.
pub struct EventBus {
    /// Sender end - held by the host.
    sender: Sender<WorldEvent>,
    /// Receiver end - held by the runtime.
    receiver: Receiver<WorldEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum events in flight. 256 is generous: one event
    ///   per join/respawn/leave, drained every tick.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a paired sender and receiver.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (EventSender, EventReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for the host to emit world events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<WorldEvent>,
}

impl EventSender {
    /// Sends an event (non-blocking).
    ///
    /// Returns `false` if the channel is full or the runtime is gone; the
    /// event is dropped and the affected player simply spawns unprotected.
    #[inline]
    pub fn send(&self, event: WorldEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for the runtime to consume world events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<WorldEvent>,
}

impl EventReceiver {
    /// Receives all pending events (non-blocking).
    #[inline]
    pub fn drain(&self) -> Vec<WorldEvent> {
        let mut events = Vec::with_capacity(8);
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Receives one event (non-blocking).
    #[inline]
    pub fn try_recv(&self) -> Option<WorldEvent> {
        self.receiver.try_recv().ok()
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}
