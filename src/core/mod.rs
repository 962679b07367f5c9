//! Core history engine.
//!
//! This module contains the pure functional core of the undo stack:
//! - Reversible operations via `Command`
//! - History configuration via `HistoryOptions`
//! - Immutable history snapshots and their transitions
//!
//! Transitions never mutate their input. The only side effects are those
//! performed by the caller's own command callbacks.

mod command;
mod history;
mod options;
mod stack;

pub(crate) use command::Callback;
pub use command::{reversible, Command};
pub use history::{can_redo, can_undo, clear, create_history, execute, redo, undo, HistoryState};
pub use options::{HistoryOptions, OptionsError, DEFAULT_MAX_DEPTH};
pub use stack::CommandStack;
