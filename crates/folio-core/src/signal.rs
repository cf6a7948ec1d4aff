//! Change notification.
//!
//! A [`Signal`] keeps a table of callbacks and calls each of them, in the
//! order they were connected, whenever the owner emits. Delivery is direct:
//! slots run on the emitting thread before `emit` returns.
//!
//! The table lock is released before any slot runs, so a slot may connect or
//! disconnect slots on the same signal. Such edits apply from the next emit.
//!
//! ```
//! use folio_core::Signal;
//!
//! let page_changed = Signal::<usize>::new();
//! let id = page_changed.connect(|page| println!("now on page {page}"));
//!
//! page_changed.emit(3);
//! page_changed.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::SignalError;
use crate::logging::targets;

new_key_type! {
    /// Handle for one connected slot.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Slots keyed by id, plus the order they were connected in.
///
/// `SlotMap` reuses freed entries, so its own iteration order is not the
/// connection order.
struct SlotTable<Args> {
    slots: SlotMap<ConnectionId, Slot<Args>>,
    order: Vec<ConnectionId>,
}

impl<Args> SlotTable<Args> {
    fn insert(&mut self, slot: Slot<Args>) -> ConnectionId {
        let id = self.slots.insert(slot);
        self.order.push(id);
        id
    }

    fn remove(&mut self, id: ConnectionId) -> bool {
        let removed = self.slots.remove(id).is_some();
        if removed {
            self.order.retain(|&other| other != id);
        }
        removed
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn snapshot(&self) -> Vec<Slot<Args>> {
        self.order
            .iter()
            .filter_map(|&id| self.slots.get(id).cloned())
            .collect()
    }
}

/// A list of callbacks taking `&Args`.
///
/// Use `()` for payload-free notifications and a tuple or struct for several
/// values.
pub struct Signal<Args> {
    slots: Mutex<SlotTable<Args>>,
    blocked: AtomicBool,
}

impl<Args: Clone + Send + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: Clone + Send + 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotTable {
                slots: SlotMap::with_key(),
                order: Vec::new(),
            }),
            blocked: AtomicBool::new(false),
        }
    }

    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Connect `slot` until the returned guard drops.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            id: self.connect(slot),
            signal: self,
        }
    }

    /// Remove one slot. Returns `false` if `id` was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id)
    }

    /// Like [`disconnect`](Self::disconnect), but an unknown id is an error.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<(), SignalError> {
        self.disconnect(id)
            .then_some(())
            .ok_or(SignalError::InvalidConnection)
    }

    pub fn disconnect_all(&self) {
        let mut slots = self.slots.lock();
        crate::folio_debug!(count = slots.len(), "disconnecting all slots");
        slots.clear();
    }

    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// While blocked, [`emit`](Self::emit) drops its payload.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Call every connected slot with `args`.
    #[tracing::instrument(skip_all, target = "folio_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "blocked");
            return;
        }

        let snapshot = self.slots.lock().snapshot();
        tracing::trace!(target: targets::SIGNAL, slots = snapshot.len(), "emit");
        snapshot.iter().for_each(|slot| slot(&args));
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

/// Disconnects its slot on drop. See [`Signal::connect_scoped`].
pub struct ConnectionGuard<'a, Args: Clone + Send + 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: Clone + Send + 'static> ConnectionGuard<'_, Args> {
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: Clone + Send + 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}
