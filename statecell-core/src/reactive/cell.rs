//! Reactive Cell Implementation
//!
//! A `ReactiveCell` holds one value and tells its listeners when that value
//! changes.
//!
//! # How Cells Work
//!
//! 1. `write` compares the new value with the stored one. Equal values are
//!    dropped unless the write is forced.
//!
//! 2. An accepted write replaces the stored value, then calls every listener
//!    in registration order with `(new, Some(old))`.
//!
//! 3. `send` calls the listeners with an arbitrary value without storing it.
//!
//! 4. While the cell is disabled, `write` and `send` do nothing at all: the
//!    value stays frozen and nobody is notified. Re-enabling does not replay
//!    anything that was dropped.
//!
//! # Notification Passes
//!
//! Each `write`/`send` takes a snapshot of the listener list before calling
//! anyone, and no lock is held while a listener runs. Consequently:
//!
//! - A listener added during a pass is first called on the next pass.
//! - A listener removed during a pass is still called in that pass.
//! - A listener may `write` to its own cell. The nested write runs its own
//!   complete pass before the outer pass moves on to the next listener.
//!
//! # Threads
//!
//! State sits behind `parking_lot` mutexes, so a cell is `Send + Sync` when
//! `T: Send`. A write and the pass that follows it are not atomic, though:
//! callers that share a cell between threads must order their writes
//! themselves.

use std::fmt::{self, Debug};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::listener::{ListenerFn, ListenerId, ListenerRegistry, Subscription};
use super::value::{TypeTag, Typed};
use crate::config::CellConfig;
use crate::error::{CellError, ListenerFailure, Result};

/// Counter for generating unique cell IDs.
static CELL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a cell. Clones of a cell share its ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u64);

impl CellId {
    fn next() -> Self {
        Self(CELL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}", self.0)
    }
}

/// The mutable part of a cell, guarded by one lock.
struct State<T> {
    value: T,
    enabled: bool,
}

struct Inner<T> {
    id: CellId,
    label: Option<String>,
    isolate_listeners: bool,
    state: Mutex<State<T>>,
    listeners: Arc<ListenerRegistry<T>>,
}

/// A reactive container for a single value of type `T`.
///
/// # Type Parameters
///
/// - `T`: The stored value. Must be `Clone` (reads hand out copies) and
///   `PartialEq` (writes of an equal value are dropped).
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use parking_lot::Mutex;
/// use statecell_core::reactive::ReactiveCell;
///
/// let health = ReactiveCell::new(100);
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let log = Arc::clone(&seen);
/// let sub = health.listen(move |new, old| log.lock().push((*new, old.copied())));
///
/// health.write(90);
/// health.write(90); // unchanged, no notification
/// sub.unsubscribe();
/// health.write(80);
///
/// assert_eq!(*seen.lock(), vec![(90, Some(100))]);
/// assert_eq!(health.read(), 80);
/// ```
pub struct ReactiveCell<T> {
    inner: Arc<Inner<T>>,
}

impl<T> ReactiveCell<T>
where
    T: Clone + PartialEq + 'static,
{
    /// Create an enabled cell holding `value`, with no listeners.
    pub fn new(value: T) -> Self {
        Self::with_config(value, CellConfig::default())
    }

    /// Create a cell using the given configuration.
    pub fn with_config(value: T, config: CellConfig) -> Self {
        let CellConfig {
            label,
            enabled,
            isolate_listeners,
        } = config;

        Self {
            inner: Arc::new(Inner {
                id: CellId::next(),
                label,
                isolate_listeners,
                state: Mutex::new(State { value, enabled }),
                listeners: Arc::new(ListenerRegistry::new()),
            }),
        }
    }

    /// Get the cell's unique ID.
    pub fn id(&self) -> CellId {
        self.inner.id
    }

    /// Get the label given at construction, if any.
    pub fn label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }

    /// Get a copy of the current value.
    pub fn read(&self) -> T {
        self.inner.state.lock().value.clone()
    }

    /// Borrow the current value without cloning it.
    ///
    /// The cell is locked while `f` runs; `f` must not touch this cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.state.lock().value)
    }

    /// Store `value` and notify listeners if it differs from the current one.
    pub fn write(&self, value: T) {
        self.write_with(value, false);
    }

    /// Store `value` and notify listeners even if it equals the current one.
    pub fn force_write(&self, value: T) {
        self.write_with(value, true);
    }

    /// Store `value` and notify listeners.
    ///
    /// Does nothing while the cell is disabled, or when `value` equals the
    /// current value and `force` is false. Otherwise every listener receives
    /// `(value, Some(previous))`.
    ///
    /// A panicking listener unwinds through this call and the remaining
    /// listeners of the pass are skipped, unless the cell was built with
    /// [`CellConfig::isolate_listeners`].
    pub fn write_with(&self, value: T, force: bool) {
        if let Some(old) = self.accept(&value, force) {
            self.dispatch(&value, Some(&old), self.inner.isolate_listeners);
        }
    }

    /// Like [`write_with`](Self::write_with), but every listener is isolated
    /// and the panics are reported once the pass is complete.
    pub fn try_write(&self, value: T, force: bool) -> Result<()> {
        match self.accept(&value, force) {
            Some(old) => into_result(self.dispatch(&value, Some(&old), true)),
            None => Ok(()),
        }
    }

    /// Replace the value with `f(current)`. Same rules as [`write`](Self::write).
    ///
    /// The cell is locked while `f` runs; `f` must not touch this cell.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = self.with(f);
        self.write(next);
    }

    /// Notify every listener with `(value, Some(current))` without storing `value`.
    ///
    /// Does nothing while the cell is disabled.
    pub fn send(&self, value: T) {
        if let Some(current) = self.current_if_enabled() {
            tracing::trace!(cell = %self.inner.id, label = ?self.inner.label, "send");
            self.dispatch(&value, Some(&current), self.inner.isolate_listeners);
        }
    }

    /// Like [`send`](Self::send), with every listener isolated.
    pub fn try_send(&self, value: T) -> Result<()> {
        match self.current_if_enabled() {
            Some(current) => into_result(self.dispatch(&value, Some(&current), true)),
            None => Ok(()),
        }
    }

    /// Register a listener. Same as `listen_with(callback, false)`.
    pub fn listen<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T, Option<&T>) + Send + Sync + 'static,
    {
        self.listen_with(callback, false)
    }

    /// Register a listener at the end of the list.
    ///
    /// With `call_immediately`, the listener is called once with
    /// `(current, None)` before this returns. That call happens even while
    /// the cell is disabled.
    pub fn listen_with<F>(&self, callback: F, call_immediately: bool) -> Subscription
    where
        F: Fn(&T, Option<&T>) + Send + Sync + 'static,
    {
        let listener: Arc<ListenerFn<T>> = Arc::new(callback);
        let id = self.inner.listeners.insert(Arc::clone(&listener));
        tracing::trace!(
            cell = %self.inner.id,
            listener = %id,
            listeners = self.inner.listeners.len(),
            "listener registered"
        );

        if call_immediately {
            let current = self.read();
            self.invoke(id, &listener, &current, None, self.inner.isolate_listeners);
        }

        let registry = Arc::downgrade(&self.inner.listeners);
        Subscription::new(id, registry)
    }

    /// Remove a listener by ID. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let removed = self.inner.listeners.remove(id);
        if removed {
            tracing::trace!(cell = %self.inner.id, listener = %id, "listener unsubscribed");
        }
        removed
    }

    /// Get the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Open or close the gate. Never notifies.
    pub fn set_enabled(&self, enabled: bool) {
        let previous = std::mem::replace(&mut self.inner.state.lock().enabled, enabled);
        if previous != enabled {
            tracing::debug!(cell = %self.inner.id, label = ?self.inner.label, enabled, "cell gate toggled");
        }
    }

    /// Check whether writes and sends currently propagate.
    pub fn is_enabled(&self) -> bool {
        self.inner.state.lock().enabled
    }

    /// Check whether the current value equals `query`.
    pub fn is(&self, query: &T) -> bool {
        self.inner.state.lock().value == *query
    }

    /// Negation of [`is`](Self::is).
    pub fn is_not(&self, query: &T) -> bool {
        !self.is(query)
    }

    /// Create a handle that does not keep the cell alive.
    ///
    /// Listeners that need to reach their own cell should capture this
    /// instead of a clone, which would form a reference cycle.
    pub fn downgrade(&self) -> WeakCell<T> {
        WeakCell {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Swap in `value` if the gate and equality check allow it, returning the
    /// value it replaced.
    fn accept(&self, value: &T, force: bool) -> Option<T> {
        let mut state = self.inner.state.lock();
        if !state.enabled {
            tracing::debug!(cell = %self.inner.id, label = ?self.inner.label, "write dropped, cell disabled");
            return None;
        }
        if !force && state.value == *value {
            return None;
        }
        let old = std::mem::replace(&mut state.value, value.clone());
        drop(state);

        tracing::trace!(cell = %self.inner.id, label = ?self.inner.label, force, "write accepted");
        Some(old)
    }

    fn current_if_enabled(&self) -> Option<T> {
        let state = self.inner.state.lock();
        if state.enabled {
            Some(state.value.clone())
        } else {
            tracing::debug!(cell = %self.inner.id, label = ?self.inner.label, "send dropped, cell disabled");
            None
        }
    }

    /// Run one notification pass over a snapshot of the listeners.
    fn dispatch(&self, new: &T, old: Option<&T>, isolate: bool) -> Vec<ListenerFailure> {
        let snapshot = self.inner.listeners.snapshot();
        let mut failures = Vec::new();
        for (id, listener) in snapshot.iter() {
            if let Some(failure) = self.invoke(*id, listener, new, old, isolate) {
                failures.push(failure);
            }
        }
        failures
    }

    fn invoke(
        &self,
        id: ListenerId,
        listener: &Arc<ListenerFn<T>>,
        new: &T,
        old: Option<&T>,
        isolate: bool,
    ) -> Option<ListenerFailure> {
        if !isolate {
            listener(new, old);
            return None;
        }

        match panic::catch_unwind(AssertUnwindSafe(|| listener(new, old))) {
            Ok(()) => None,
            Err(payload) => {
                let failure = ListenerFailure::from_panic(id, payload);
                tracing::error!(
                    cell = %self.inner.id,
                    label = ?self.inner.label,
                    listener = %id,
                    message = %failure.message,
                    "listener panicked"
                );
                Some(failure)
            }
        }
    }
}

impl<T> ReactiveCell<T>
where
    T: Clone + PartialEq + Typed + 'static,
{
    /// Get the runtime kind of the current value.
    pub fn type_tag(&self) -> TypeTag {
        self.inner.state.lock().value.type_tag()
    }

    /// Check whether the current value is of kind `tag`.
    pub fn type_is(&self, tag: TypeTag) -> bool {
        self.type_tag() == tag
    }

    /// Negation of [`type_is`](Self::type_is).
    pub fn type_is_not(&self, tag: TypeTag) -> bool {
        !self.type_is(tag)
    }
}

fn into_result(failures: Vec<ListenerFailure>) -> Result<()> {
    if failures.is_empty() {
        Ok(())
    } else {
        Err(CellError::ListenerPanicked { failures })
    }
}

impl<T> Clone for ReactiveCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for ReactiveCell<T>
where
    T: Clone + PartialEq + Default + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Debug for ReactiveCell<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("ReactiveCell")
            .field("id", &self.inner.id)
            .field("label", &self.inner.label)
            .field("value", &state.value)
            .field("enabled", &state.enabled)
            .field("listener_count", &self.inner.listeners.len())
            .finish()
    }
}

/// Non-owning handle to a [`ReactiveCell`].
pub struct WeakCell<T> {
    inner: Weak<Inner<T>>,
}

impl<T> WeakCell<T> {
    /// Get the cell back, if any strong handle still exists.
    pub fn upgrade(&self) -> Option<ReactiveCell<T>> {
        self.inner.upgrade().map(|inner| ReactiveCell { inner })
    }
}

impl<T> Clone for WeakCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> Debug for WeakCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakCell")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::Value;
    use std::sync::atomic::{AtomicI32, Ordering};

    type Log = Arc<Mutex<Vec<(i32, Option<i32>)>>>;

    fn recorder(cell: &ReactiveCell<i32>) -> (Log, Subscription) {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let sub = cell.listen(move |new, old| sink.lock().push((*new, old.copied())));
        (log, sub)
    }

    #[test]
    fn cell_read_and_write() {
        let cell = ReactiveCell::new(0);
        assert_eq!(cell.read(), 0);

        cell.write(42);
        assert_eq!(cell.read(), 42);
    }

    #[test]
    fn write_notifies_with_new_and_old() {
        let cell = ReactiveCell::new(1);
        let (log, _sub) = recorder(&cell);

        cell.write(2);
        cell.write(3);
        assert_eq!(*log.lock(), vec![(2, Some(1)), (3, Some(2))]);
    }

    #[test]
    fn equal_write_is_dropped() {
        let cell = ReactiveCell::new(5);
        let (log, _sub) = recorder(&cell);

        cell.write(5);
        assert!(log.lock().is_empty());
        assert_eq!(cell.read(), 5);
    }

    #[test]
    fn forced_write_always_notifies() {
        let cell = ReactiveCell::new(5);
        let (log, _sub) = recorder(&cell);

        cell.force_write(5);
        cell.write_with(5, true);
        assert_eq!(*log.lock(), vec![(5, Some(5)), (5, Some(5))]);
    }

    #[test]
    fn send_broadcasts_without_storing() {
        let cell = ReactiveCell::new(10);
        let (log, _sub) = recorder(&cell);

        cell.send(99);
        assert_eq!(cell.read(), 10);
        assert_eq!(*log.lock(), vec![(99, Some(10))]);
    }

    #[test]
    fn disabled_cell_is_frozen() {
        let cell = ReactiveCell::new(0);
        let (log, _sub) = recorder(&cell);

        cell.set_enabled(false);
        assert!(!cell.is_enabled());
        cell.write(1);
        cell.force_write(2);
        cell.send(3);
        cell.update(|v| v + 10);

        assert_eq!(cell.read(), 0);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn disabled_cell_still_serves_listen_and_try_ops() {
        let cell = ReactiveCell::new(0);
        cell.set_enabled(false);

        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let sub = cell.listen_with(move |new, old| sink.lock().push((*new, old.copied())), true);
        assert!(sub.is_active());

        assert!(cell.try_write(1, false).is_ok());
        assert!(cell.try_write(1, true).is_ok());
        assert!(cell.try_send(2).is_ok());

        assert_eq!(cell.read(), 0);
        assert_eq!(*log.lock(), vec![(0, None)]);
    }

    #[test]
    fn nested_send_in_isolated_cell() {
        let cell = ReactiveCell::with_config(0, CellConfig::new().isolate_listeners(true));
        let weak = cell.downgrade();
        cell.listen(move |new, _| {
            if *new == 1 {
                if let Some(cell) = weak.upgrade() {
                    cell.send(5);
                }
            }
        });
        let (log, _sub) = recorder(&cell);
        cell.listen(|new, _| {
            if *new == 5 {
                panic!("rejects five");
            }
        });

        cell.write(1);

        assert_eq!(cell.read(), 1);
        assert_eq!(*log.lock(), vec![(5, Some(1)), (1, Some(0))]);
    }

    #[test]
    fn reenabling_does_not_replay() {
        let cell = ReactiveCell::new(0);
        let (log, _sub) = recorder(&cell);

        cell.set_enabled(false);
        cell.write(1);
        cell.set_enabled(true);
        assert!(log.lock().is_empty());

        cell.write(2);
        assert_eq!(*log.lock(), vec![(2, Some(0))]);
    }

    #[test]
    fn set_enabled_never_notifies() {
        let cell = ReactiveCell::new(0);
        let (log, _sub) = recorder(&cell);

        cell.set_enabled(false);
        cell.set_enabled(true);
        cell.set_enabled(true);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn cell_update() {
        let cell = ReactiveCell::new(10);
        cell.update(|v| v + 5);
        assert_eq!(cell.read(), 15);
    }

    #[test]
    fn with_borrows_value() {
        let cell = ReactiveCell::new(String::from("hello"));
        assert_eq!(cell.with(|s| s.len()), 5);
    }

    #[test]
    fn listeners_fire_in_registration_order() {
        let cell = ReactiveCell::new(0);
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let order = Arc::clone(&order);
            cell.listen(move |_, _| order.lock().push(tag));
        }

        cell.write(1);
        assert_eq!(*order.lock(), vec!["a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_stops_only_that_listener() {
        let cell = ReactiveCell::new(0);
        let (first, first_sub) = recorder(&cell);
        let (second, _second_sub) = recorder(&cell);

        cell.write(1);
        assert!(first_sub.unsubscribe());
        cell.write(2);

        assert_eq!(*first.lock(), vec![(1, Some(0))]);
        assert_eq!(*second.lock(), vec![(1, Some(0)), (2, Some(1))]);
    }

    #[test]
    fn unsubscribe_twice_is_noop() {
        let cell = ReactiveCell::new(0);
        let (_log, sub) = recorder(&cell);

        assert!(sub.unsubscribe());
        assert!(!sub.unsubscribe());
        assert!(!cell.unsubscribe(sub.id()));
        assert_eq!(cell.listener_count(), 0);
    }

    #[test]
    fn duplicate_registrations_are_independent() {
        let cell = ReactiveCell::new(0);
        let count = Arc::new(AtomicI32::new(0));
        let callback = {
            let count = Arc::clone(&count);
            move |_: &i32, _: Option<&i32>| {
                count.fetch_add(1, Ordering::SeqCst);
            }
        };

        let first = cell.listen(callback.clone());
        let _second = cell.listen(callback);
        cell.write(1);
        assert_eq!(count.load(Ordering::SeqCst), 2);

        first.unsubscribe();
        cell.write(2);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn listen_with_call_immediately() {
        let cell = ReactiveCell::new(7);
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);

        cell.listen_with(move |new, old| sink.lock().push((*new, old.copied())), true);
        assert_eq!(*log.lock(), vec![(7, None)]);

        cell.write(8);
        assert_eq!(*log.lock(), vec![(7, None), (8, Some(7))]);
    }

    #[test]
    fn is_and_is_not() {
        let cell = ReactiveCell::new(3);
        assert!(cell.is(&3));
        assert!(!cell.is_not(&3));
        assert!(!cell.is(&4));
        assert!(cell.is_not(&4));
    }

    #[test]
    fn type_queries_on_dynamic_values() {
        let cell = ReactiveCell::new(Value::Nil);
        assert!(cell.type_is(TypeTag::Nil));

        cell.write(Value::from("name"));
        assert_eq!(cell.type_tag(), TypeTag::String);
        assert!(cell.type_is_not(TypeTag::Number));
    }

    #[test]
    fn type_queries_on_static_values() {
        let cell = ReactiveCell::new(Some(1.5_f64));
        assert!(cell.type_is(TypeTag::Number));
        cell.write(None);
        assert!(cell.type_is(TypeTag::Nil));
    }

    #[test]
    fn cell_clone_shares_state() {
        let cell1 = ReactiveCell::new(0);
        let cell2 = cell1.clone();
        let (log, _sub) = recorder(&cell1);

        cell2.write(42);
        assert_eq!(cell1.read(), 42);
        assert_eq!(cell1.id(), cell2.id());
        assert_eq!(*log.lock(), vec![(42, Some(0))]);
    }

    #[test]
    fn cell_ids_are_unique() {
        let c1 = ReactiveCell::new(0);
        let c2 = ReactiveCell::new(0);
        let c3 = ReactiveCell::new(0);

        assert_ne!(c1.id(), c2.id());
        assert_ne!(c2.id(), c3.id());
        assert_ne!(c1.id(), c3.id());
    }

    #[test]
    fn config_sets_label_and_gate() {
        let cell = ReactiveCell::with_config(0, CellConfig::new().label("ammo").enabled(false));
        assert_eq!(cell.label(), Some("ammo"));
        assert!(!cell.is_enabled());
    }

    #[test]
    #[should_panic(expected = "listener failed")]
    fn listener_panic_propagates_by_default() {
        let cell = ReactiveCell::new(0);
        cell.listen(|_, _| panic!("listener failed"));
        cell.write(1);
    }

    #[test]
    fn propagated_panic_skips_remaining_listeners() {
        let cell = ReactiveCell::new(0);
        let count = Arc::new(AtomicI32::new(0));
        cell.listen(|_, _| panic!("first"));
        let counter = Arc::clone(&count);
        cell.listen(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let result = panic::catch_unwind(AssertUnwindSafe(|| cell.write(1)));
        assert!(result.is_err());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        // The value was stored before the pass started.
        assert_eq!(cell.read(), 1);
    }

    #[test]
    fn isolated_listeners_keep_going() {
        let cell = ReactiveCell::with_config(0, CellConfig::new().isolate_listeners(true));
        let count = Arc::new(AtomicI32::new(0));
        cell.listen(|_, _| panic!("first"));
        let counter = Arc::clone(&count);
        cell.listen(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        cell.write(1);
        cell.send(2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn try_write_reports_every_failure() {
        let cell = ReactiveCell::new(0);
        let bad_a = cell.listen(|_, _| panic!("a"));
        let (log, _sub) = recorder(&cell);
        let bad_b = cell.listen(|_, _| panic!("b"));

        let err = cell.try_write(1, false).unwrap_err();
        let CellError::ListenerPanicked { failures } = err;
        let ids: Vec<_> = failures.iter().map(|f| f.listener).collect();
        assert_eq!(ids, vec![bad_a.id(), bad_b.id()]);
        assert_eq!(failures[0].message, "a");
        assert_eq!(*log.lock(), vec![(1, Some(0))]);
    }

    #[test]
    fn try_write_and_try_send_succeed_without_panics() {
        let cell = ReactiveCell::new(0);
        let (log, _sub) = recorder(&cell);

        assert!(cell.try_write(1, false).is_ok());
        assert!(cell.try_write(1, false).is_ok());
        assert!(cell.try_send(5).is_ok());
        assert_eq!(*log.lock(), vec![(1, Some(0)), (5, Some(1))]);
    }

    #[test]
    fn weak_cell_does_not_keep_cell_alive() {
        let cell = ReactiveCell::new(0);
        let weak = cell.downgrade();
        assert!(weak.upgrade().is_some());

        drop(cell);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn debug_shows_value_and_listeners() {
        let cell = ReactiveCell::with_config(3, CellConfig::new().label("lives"));
        let _sub = cell.listen(|_, _| {});
        let rendered = format!("{:?}", cell);
        assert!(rendered.contains("value: 3"));
        assert!(rendered.contains("listener_count: 1"));
        assert!(rendered.contains("lives"));
    }
}
