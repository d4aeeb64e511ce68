//! Reactive Primitives
//!
//! This module implements the reactive cell: a single value that notifies its
//! listeners when it changes.
//!
//! # Concepts
//!
//! ## Cells
//!
//! A [`ReactiveCell`] stores one value. Writing a different value stores it
//! and calls every listener with the new and previous values. Writing an equal
//! value does nothing unless the write is forced. `send` announces a value
//! without storing it.
//!
//! ## Listeners
//!
//! A listener is any `Fn(&T, Option<&T>)`. Registering one returns a
//! [`Subscription`] whose `unsubscribe` removes exactly that registration.
//!
//! ## The Enabled Gate
//!
//! A disabled cell ignores writes and sends entirely, so its value is frozen
//! until it is enabled again.
//!
//! ## Type Tags
//!
//! Cells of [`Value`] (or any [`Typed`] type) can report the runtime kind of
//! their contents through [`TypeTag`].

mod cell;
mod listener;
mod value;

pub use cell::{CellId, ReactiveCell, WeakCell};
pub use listener::{ListenerFn, ListenerId, Subscription};
pub use value::{NativeFn, Table, TypeTag, Typed, Value};
