//! Cell Configuration
//!
//! Construction-time options for a [`ReactiveCell`](crate::reactive::ReactiveCell).
//! Everything here has a sensible default, so `ReactiveCell::new` never needs
//! a config; use [`ReactiveCell::with_config`](crate::reactive::ReactiveCell::with_config)
//! when a label or listener isolation is wanted.

/// Options applied when a cell is created.
///
/// # Example
///
/// ```rust
/// use statecell_core::{CellConfig, reactive::ReactiveCell};
///
/// let config = CellConfig::new().label("health").isolate_listeners(true);
/// let cell = ReactiveCell::with_config(100, config);
/// assert_eq!(cell.label(), Some("health"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellConfig {
    /// Name shown in log output and `Debug`.
    pub label: Option<String>,

    /// Initial state of the enabled gate.
    pub enabled: bool,

    /// Catch listener panics during `write`/`send` instead of unwinding.
    ///
    /// Caught panics are logged at error level and the pass continues with
    /// the next listener.
    pub isolate_listeners: bool,
}

impl CellConfig {
    /// Default configuration: unlabeled, enabled, panics propagate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name shown in logs and `Debug`.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the initial state of the enabled gate.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Catch listener panics instead of unwinding through `write`/`send`.
    pub fn isolate_listeners(mut self, isolate: bool) -> Self {
        self.isolate_listeners = isolate;
        self
    }
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            label: None,
            enabled: true,
            isolate_listeners: false,
        }
    }
}
