//! Reversible operations tracked by the history.
//!
//! A command never owns the value it changes. It closes over whatever the
//! caller wants to mutate and reports the resulting value back to the engine.

use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

/// Callback that performs one direction of a command.
pub(crate) type Callback<T, E> = Rc<dyn Fn() -> Result<T, E>>;

/// A single undoable change: a forward callback and its inverse.
///
/// Both callbacks take no arguments and return the value that becomes the
/// history's `current` after they run. The engine trusts them to be true
/// inverses and never inspects what they return.
///
/// Cloning a command shares its callbacks, so a clone is the same operation.
/// Equality is identity: two commands are equal only if they share callbacks
/// and carry the same name.
///
/// # Example
///
/// ```rust
/// use lithe_undo::Command;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let counter = Rc::new(Cell::new(0));
/// let (up, down) = (Rc::clone(&counter), Rc::clone(&counter));
///
/// let increment = Command::new(
///     move || {
///         up.set(up.get() + 1);
///         up.get()
///     },
///     move || {
///         down.set(down.get() - 1);
///         down.get()
///     },
/// )
/// .named("increment");
///
/// assert_eq!(increment.name(), Some("increment"));
/// assert_eq!(increment.apply(), Ok(1));
/// assert_eq!(increment.invert(), Ok(0));
/// ```
pub struct Command<T, E = Infallible> {
    name: Option<String>,
    apply: Callback<T, E>,
    invert: Callback<T, E>,
}

impl<T: 'static> Command<T, Infallible> {
    /// Create a command from two infallible callbacks.
    pub fn new<A, I>(apply: A, invert: I) -> Self
    where
        A: Fn() -> T + 'static,
        I: Fn() -> T + 'static,
    {
        Self::from_callbacks(None, Rc::new(move || Ok(apply())), Rc::new(move || Ok(invert())))
    }
}

impl<T, E> Command<T, E> {
    /// Create a command whose callbacks can fail.
    ///
    /// A failure is handed back to whoever drove the transition, untouched.
    pub fn fallible<A, I>(apply: A, invert: I) -> Self
    where
        A: Fn() -> Result<T, E> + 'static,
        I: Fn() -> Result<T, E> + 'static,
    {
        Self::from_callbacks(None, Rc::new(apply), Rc::new(invert))
    }

    pub(crate) fn from_callbacks(
        name: Option<String>,
        apply: Callback<T, E>,
        invert: Callback<T, E>,
    ) -> Self {
        Self {
            name,
            apply,
            invert,
        }
    }

    /// Attach a diagnostic name, returning the renamed command.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The diagnostic name, if any. Never consulted by the engine.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Run the forward callback.
    pub fn apply(&self) -> Result<T, E> {
        (self.apply)()
    }

    /// Run the inverse callback.
    pub fn invert(&self) -> Result<T, E> {
        (self.invert)()
    }

    /// Name used in log output.
    pub(crate) fn label(&self) -> &str {
        self.name().unwrap_or("<unnamed>")
    }
}

impl<T, E> Clone for Command<T, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            apply: Rc::clone(&self.apply),
            invert: Rc::clone(&self.invert),
        }
    }
}

impl<T, E> PartialEq for Command<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && Rc::ptr_eq(&self.apply, &other.apply)
            && Rc::ptr_eq(&self.invert, &other.invert)
    }
}

impl<T, E> fmt::Debug for Command<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Create a named, infallible command.
///
/// # Example
///
/// ```rust
/// use lithe_undo::reversible;
///
/// let noop = reversible("noop", || 0, || 0);
/// assert_eq!(noop.name(), Some("noop"));
/// ```
pub fn reversible<T, A, I>(name: impl Into<String>, apply: A, invert: I) -> Command<T>
where
    T: 'static,
    A: Fn() -> T + 'static,
    I: Fn() -> T + 'static,
{
    Command::new(apply, invert).named(name)
}
