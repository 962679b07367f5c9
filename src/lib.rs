//! Lithe Undo: a minimal, immutable undo/redo history
//!
//! A history is a plain value. Every transition (execute, undo, redo, clear)
//! reads a [`HistoryState`] and returns a new one, leaving its input
//! untouched. The engine never owns the value being edited: each
//! [`Command`] closes over it and reports the resulting value back.
//!
//! # Core Concepts
//!
//! - **Command**: A forward callback and its inverse
//! - **History**: The live value plus bounded undo and redo stacks
//! - **Options**: The depth bound applied to both stacks
//!
//! # Example
//!
//! ```rust
//! use lithe_undo::{reversible, HistoryOptions, HistoryState};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let total = Rc::new(Cell::new(0));
//!
//! let add = |delta: i32| {
//!     let (up, down) = (Rc::clone(&total), Rc::clone(&total));
//!     reversible(
//!         format!("add {delta}"),
//!         move || {
//!             up.set(up.get() + delta);
//!             up.get()
//!         },
//!         move || {
//!             down.set(down.get() - delta);
//!             down.get()
//!         },
//!     )
//! };
//!
//! let history = HistoryState::with_options(0, HistoryOptions::with_max_depth(3));
//! let history = history.execute(add(1)).unwrap();
//! let history = history.execute(add(2)).unwrap();
//! assert_eq!(*history.current(), 3);
//!
//! let history = history.undo().unwrap();
//! assert_eq!(*history.current(), 1);
//! assert_eq!(history.next_redo().and_then(|c| c.name()), Some("add 2"));
//!
//! // A new command discards everything that was undone.
//! let history = history.execute(add(10)).unwrap();
//! assert!(!history.can_redo());
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, CommandBuilder};
pub use crate::core::{
    can_redo, can_undo, clear, create_history, execute, redo, reversible, undo, Command,
    CommandStack, HistoryOptions, HistoryState, OptionsError, DEFAULT_MAX_DEPTH,
};
