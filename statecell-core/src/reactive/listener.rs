//! Listener types for the reactive cell.
//!
//! A listener is a callback that receives `(new, old)` whenever its cell
//! notifies. Each registration gets its own [`ListenerId`], so registering the
//! same closure twice yields two independent entries that are removed
//! independently.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use parking_lot::Mutex;
use smallvec::SmallVec;

/// Closure type for cell listeners.
///
/// The second argument is the previous value. It is `None` only for the
/// immediate call made by `listen_with(.., true)`, where no transition exists.
pub type ListenerFn<T> = dyn Fn(&T, Option<&T>) + Send + Sync;

/// Listener list captured at the start of a notification pass.
pub(crate) type Snapshot<T> = SmallVec<[(ListenerId, Arc<ListenerFn<T>>); 4]>;

/// Unique identifier for a listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Generate a new unique listener ID.
    ///
    /// Uses an atomic counter to ensure uniqueness across threads.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Insertion-ordered listener storage.
///
/// The lock is only held to mutate the map or copy it into a snapshot, never
/// while a callback runs, so callbacks may register or remove listeners freely.
pub(crate) struct ListenerRegistry<T> {
    entries: Mutex<IndexMap<ListenerId, Arc<ListenerFn<T>>>>,
}

impl<T> ListenerRegistry<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
        }
    }

    pub(crate) fn insert(&self, listener: Arc<ListenerFn<T>>) -> ListenerId {
        let id = ListenerId::new();
        self.entries.lock().insert(id, listener);
        id
    }

    /// Remove a listener, keeping the order of the rest.
    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        self.entries.lock().shift_remove(&id).is_some()
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.lock().contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub(crate) fn snapshot(&self) -> Snapshot<T> {
        self.entries
            .lock()
            .iter()
            .map(|(id, cb)| (*id, Arc::clone(cb)))
            .collect()
    }
}

/// Type-erased removal, so [`Subscription`] does not carry the cell's `T`.
pub(crate) trait Detach: Send + Sync {
    fn detach(&self, id: ListenerId) -> bool;
    fn is_attached(&self, id: ListenerId) -> bool;
}

impl<T> Detach for ListenerRegistry<T> {
    fn detach(&self, id: ListenerId) -> bool {
        self.remove(id)
    }

    fn is_attached(&self, id: ListenerId) -> bool {
        self.contains(id)
    }
}

/// Handle returned by `listen`.
///
/// Dropping a subscription does NOT remove the listener; call
/// [`unsubscribe`](Subscription::unsubscribe). The handle only holds a weak
/// reference, so it never keeps the cell alive.
pub struct Subscription {
    id: ListenerId,
    registry: Weak<dyn Detach>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, registry: Weak<dyn Detach>) -> Self {
        Self { id, registry }
    }

    /// The listener this handle controls.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove the listener from its cell.
    ///
    /// Returns `true` if this call removed it. Calling again, or after the
    /// cell is gone, is a silent no-op returning `false`.
    pub fn unsubscribe(&self) -> bool {
        let removed = self
            .registry
            .upgrade()
            .map(|registry| registry.detach(self.id))
            .unwrap_or(false);
        if removed {
            tracing::trace!(listener = %self.id, "listener unsubscribed");
        }
        removed
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.is_attached(self.id))
            .unwrap_or(false)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
