//! Statecell Core
//!
//! This crate provides a minimal reactive-value primitive: a container holding
//! a single typed value that notifies registered listeners when the value
//! changes, or when it is asked to re-announce.
//!
//! It is deliberately not a state-management framework. There are no derived
//! values, no dependency graph, no batching and no persistence.
//!
//! # Architecture
//!
//! - `reactive`: the cell, its listener registry and runtime type tags
//! - `config`: construction-time options
//! - `error`: errors reported by isolated notification passes
//!
//! # Example
//!
//! ```rust
//! use statecell_core::reactive::ReactiveCell;
//!
//! let count = ReactiveCell::new(0);
//!
//! let sub = count.listen(|new, old| {
//!     println!("count: {:?} -> {}", old, new);
//! });
//!
//! count.write(5);   // prints "count: Some(0) -> 5"
//! count.write(5);   // unchanged, prints nothing
//! count.send(7);    // prints "count: Some(5) -> 7", value stays 5
//! assert_eq!(count.read(), 5);
//!
//! sub.unsubscribe();
//! ```

pub mod config;
pub mod error;
pub mod reactive;

pub use config::CellConfig;
pub use error::{CellError, ListenerFailure, Result};
