//! The history engine.
//!
//! A [`HistoryState`] is an immutable snapshot: the live value plus the undo
//! and redo stacks. Every transition reads a state and returns a new one,
//! leaving its input untouched.

use super::command::Command;
use super::options::HistoryOptions;
use super::stack::CommandStack;
use std::convert::Infallible;
use std::fmt;
use tracing::{debug, trace};

/// Snapshot of a linear undo/redo history over a value of type `T`.
///
/// `E` is the error type the commands' callbacks may fail with. Transitions
/// hand those failures back unchanged and build no new state when one occurs.
///
/// # Example
///
/// ```rust
/// use lithe_undo::{reversible, HistoryState};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let value = Rc::new(Cell::new(0));
/// let (up, down) = (Rc::clone(&value), Rc::clone(&value));
/// let add_five = reversible(
///     "add five",
///     move || {
///         up.set(up.get() + 5);
///         up.get()
///     },
///     move || {
///         down.set(down.get() - 5);
///         down.get()
///     },
/// );
///
/// let history = HistoryState::new(0);
/// let history = history.execute(add_five).unwrap();
/// assert_eq!(*history.current(), 5);
///
/// let history = history.undo().unwrap();
/// assert_eq!(*history.current(), 0);
/// assert!(history.can_redo());
/// ```
pub struct HistoryState<T, E = Infallible> {
    current: T,
    options: HistoryOptions,
    undo_stack: CommandStack<T, E>,
    redo_stack: CommandStack<T, E>,
}

impl<T, E> HistoryState<T, E> {
    /// Create a history with the default options.
    pub fn new(initial: T) -> Self {
        Self::with_options(initial, HistoryOptions::default())
    }

    /// Create a history with explicit options, taken verbatim.
    pub fn with_options(initial: T, options: HistoryOptions) -> Self {
        Self {
            current: initial,
            options,
            undo_stack: CommandStack::new(),
            redo_stack: CommandStack::new(),
        }
    }

    /// The latest computed value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Consume the history, keeping only the live value.
    pub fn into_current(self) -> T {
        self.current
    }

    /// The options resolved at creation.
    pub fn options(&self) -> &HistoryOptions {
        &self.options
    }

    /// Executed commands, most recent last.
    pub fn undo_stack(&self) -> &CommandStack<T, E> {
        &self.undo_stack
    }

    /// Undone commands, most recently undone last.
    pub fn redo_stack(&self) -> &CommandStack<T, E> {
        &self.redo_stack
    }

    /// Whether there is anything to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there is anything to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// The command the next [`undo`](Self::undo) would invert.
    pub fn next_undo(&self) -> Option<&Command<T, E>> {
        self.undo_stack.last()
    }

    /// The command the next [`redo`](Self::redo) would re-apply.
    pub fn next_redo(&self) -> Option<&Command<T, E>> {
        self.redo_stack.last()
    }

    /// Drop all history, keeping the live value and options.
    pub fn clear(&self) -> Self
    where
        T: Clone,
    {
        trace!(
            undo_len = self.undo_stack.len(),
            redo_len = self.redo_stack.len(),
            "clearing history"
        );
        Self::with_options(self.current.clone(), self.options)
    }
}

impl<T: Clone, E> HistoryState<T, E> {
    /// Apply a new command.
    ///
    /// On success the command is pushed onto the undo stack (evicting the
    /// oldest entry if the bound is exceeded) and the redo stack is emptied.
    pub fn execute(&self, command: Command<T, E>) -> Result<Self, E> {
        let current = command.apply()?;

        if !self.redo_stack.is_empty() {
            debug!(
                command = command.label(),
                discarded = self.redo_stack.len(),
                "new command discards redo branch"
            );
        }

        let mut undo_stack = self.undo_stack.clone();
        let label = command.label().to_string();
        push_bounded(&mut undo_stack, command, &self.options, "undo");

        trace!(
            command = %label,
            undo_len = undo_stack.len(),
            redo_len = 0,
            "executed command"
        );

        Ok(Self {
            current,
            options: self.options,
            undo_stack,
            redo_stack: CommandStack::new(),
        })
    }

    /// Invert the most recently executed command.
    ///
    /// With nothing to undo, returns a copy of this state.
    pub fn undo(&self) -> Result<Self, E> {
        let mut undo_stack = self.undo_stack.clone();
        let Some(command) = undo_stack.pop() else {
            trace!("nothing to undo");
            return Ok(self.clone());
        };

        let current = command.invert()?;

        let mut redo_stack = self.redo_stack.clone();
        let label = command.label().to_string();
        push_bounded(&mut redo_stack, command, &self.options, "redo");

        trace!(
            command = %label,
            undo_len = undo_stack.len(),
            redo_len = redo_stack.len(),
            "undid command"
        );

        Ok(Self {
            current,
            options: self.options,
            undo_stack,
            redo_stack,
        })
    }

    /// Re-apply the most recently undone command.
    ///
    /// The forward callback runs again; no value is cached from the original
    /// execution. With nothing to redo, returns a copy of this state.
    pub fn redo(&self) -> Result<Self, E> {
        let mut redo_stack = self.redo_stack.clone();
        let Some(command) = redo_stack.pop() else {
            trace!("nothing to redo");
            return Ok(self.clone());
        };

        let current = command.apply()?;

        let mut undo_stack = self.undo_stack.clone();
        let label = command.label().to_string();
        push_bounded(&mut undo_stack, command, &self.options, "undo");

        trace!(
            command = %label,
            undo_len = undo_stack.len(),
            redo_len = redo_stack.len(),
            "redid command"
        );

        Ok(Self {
            current,
            options: self.options,
            undo_stack,
            redo_stack,
        })
    }
}

fn push_bounded<T, E>(
    stack: &mut CommandStack<T, E>,
    command: Command<T, E>,
    options: &HistoryOptions,
    side: &'static str,
) {
    if let Some(evicted) = stack.push(command, options) {
        debug!(
            evicted = evicted.label(),
            stack = side,
            max_depth = ?options.max_depth,
            "evicted oldest command"
        );
    }
}

impl<T: Clone, E> Clone for HistoryState<T, E> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            options: self.options,
            undo_stack: self.undo_stack.clone(),
            redo_stack: self.redo_stack.clone(),
        }
    }
}

impl<T: PartialEq, E> PartialEq for HistoryState<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
            && self.options == other.options
            && self.undo_stack == other.undo_stack
            && self.redo_stack == other.redo_stack
    }
}

impl<T: fmt::Debug, E> fmt::Debug for HistoryState<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryState")
            .field("current", &self.current)
            .field("options", &self.options)
            .field("undo_stack", &self.undo_stack)
            .field("redo_stack", &self.redo_stack)
            .finish()
    }
}

/// Create a history. `None` resolves to the default options.
pub fn create_history<T, E>(initial: T, options: Option<HistoryOptions>) -> HistoryState<T, E> {
    HistoryState::with_options(initial, options.unwrap_or_default())
}

/// Apply a new command to `state`. See [`HistoryState::execute`].
pub fn execute<T: Clone, E>(
    state: &HistoryState<T, E>,
    command: Command<T, E>,
) -> Result<HistoryState<T, E>, E> {
    state.execute(command)
}

/// Undo the latest command of `state`. See [`HistoryState::undo`].
pub fn undo<T: Clone, E>(state: &HistoryState<T, E>) -> Result<HistoryState<T, E>, E> {
    state.undo()
}

/// Redo the latest undone command of `state`. See [`HistoryState::redo`].
pub fn redo<T: Clone, E>(state: &HistoryState<T, E>) -> Result<HistoryState<T, E>, E> {
    state.redo()
}

/// Empty both stacks of `state`. See [`HistoryState::clear`].
pub fn clear<T: Clone, E>(state: &HistoryState<T, E>) -> HistoryState<T, E> {
    state.clear()
}

/// Whether `state` has anything to undo.
pub fn can_undo<T, E>(state: &HistoryState<T, E>) -> bool {
    state.can_undo()
}

/// Whether `state` has anything to redo.
pub fn can_redo<T, E>(state: &HistoryState<T, E>) -> bool {
    state.can_redo()
}
