//! Error types.
//!
//! The cell itself never fails: every operation is in-memory and either
//! completes or unwinds. The only reportable failure is a listener that
//! panicked while isolation was in effect.

use std::any::Any;
use std::fmt;

use thiserror::Error;

use crate::reactive::ListenerId;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CellError>;

/// Errors reported by [`ReactiveCell`](crate::reactive::ReactiveCell).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    /// One or more listeners panicked during an isolated notification pass.
    ///
    /// Every listener in the pass was still invoked; `failures` lists the ones
    /// that panicked, in invocation order.
    #[error("{} listener(s) panicked during notification: {}", .failures.len(), summary(.failures))]
    ListenerPanicked { failures: Vec<ListenerFailure> },
}

/// A single listener panic caught during an isolated pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    /// The listener that panicked.
    pub listener: ListenerId,
    /// The panic payload, if it was a string.
    pub message: String,
}

impl ListenerFailure {
    pub(crate) fn from_panic(listener: ListenerId, payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_string()
        };
        Self { listener, message }
    }
}

impl fmt::Display for ListenerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener {} panicked: {}", self.listener, self.message)
    }
}

fn summary(failures: &[ListenerFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
