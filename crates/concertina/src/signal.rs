//! Signal/slot notification for accordion state changes.
//!
//! This module provides a small, Qt-inspired signal type. A widget exposes
//! public [`Signal`] fields and emits them when its state changes; the
//! embedding shell connects closures to react (repaint a header, move real
//! input focus, and so on).
//!
//! Unlike a full event-loop signal system, slots here are always invoked
//! directly on the emitting thread. The accordion mutates state only from
//! synchronous input callbacks, so there is no queued or cross-thread
//! delivery to arrange.
//!
//! # Example
//!
//! ```
//! use concertina::signal::Signal;
//!
//! let toggled = Signal::<(usize, bool)>::new();
//!
//! let id = toggled.connect(|&(index, open)| {
//!     println!("item {index} is now {}", if open { "open" } else { "closed" });
//! });
//!
//! toggled.emit((0, true));
//! toggled.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Returned by [`Signal::connect`]; pass it to [`Signal::disconnect`] to
    /// remove the slot. The ID stays valid until the connection is removed or
    /// the signal is dropped.
    pub struct ConnectionId;
}

/// A boxed slot, shared so emission can run outside the connection lock.
type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A signal that invokes connected slots synchronously when emitted.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed by reference to each slot. Use `()`
///   for argument-less signals or a tuple for several values.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    /// Whether emission is temporarily suppressed.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a [`ConnectionId`] that can be used to disconnect the slot.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Suppress or re-enable emission.
    ///
    /// While blocked, [`emit`](Self::emit) does nothing. Useful during batch
    /// updates to avoid cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking every connected slot with `args`.
    ///
    /// Slots run in connection order on the emitting thread. The connection
    /// lock is released before any slot executes, so a slot may connect or
    /// disconnect without deadlocking; such changes take effect on the next
    /// emission.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: "concertina::signal", slot_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}
